use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

use crate::activity::{parse_events, ActivityEvent, ActivityRecord};
use crate::shared::{DomainError, UserId};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Longest consecutive-day streak per user.
pub type StreakResult = HashMap<UserId, u32>;

/// Signed difference between two instants, expressed in days.
///
/// Sub-day differences come back fractional, never rounded. Negative when
/// `t1` precedes `t2`.
pub fn day_difference(t1: DateTime<FixedOffset>, t2: DateTime<FixedOffset>) -> f64 {
    t1.signed_duration_since(t2).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Longest run of exactly-one-day-apart events per user, scanned in feed
/// order.
///
/// A run extends only while consecutive events share a user and sit exactly
/// one day apart; anything else (a gap, a same-day repeat, an event by
/// another user) closes the open run and credits it to the user it belongs
/// to, keeping the best value seen for that user. The feed is trusted to be
/// sorted ascending by timestamp.
pub fn longest_streaks(events: &[ActivityEvent]) -> Result<StreakResult, DomainError> {
    let (first, rest) = events.split_first().ok_or_else(|| {
        DomainError::EmptyInput("activity feed contains no events".to_string())
    })?;

    let mut best: StreakResult = HashMap::new();
    let mut current: u32 = 1;
    let mut prev = first;

    for event in rest {
        let extends = event.user_id() == prev.user_id()
            && day_difference(event.timestamp(), prev.timestamp()) == 1.0;

        if extends {
            current += 1;
        } else {
            record_streak(&mut best, prev.user_id(), current);
            current = 1;
        }
        prev = event;
    }

    // The last run is still open; flush it for the final event's user
    record_streak(&mut best, prev.user_id(), current);

    Ok(best)
}

/// Parse a raw feed and scan it in one go.
///
/// The first unparseable timestamp aborts the whole computation instead of
/// being skipped.
pub fn longest_streaks_from_records(
    records: &[ActivityRecord],
) -> Result<StreakResult, DomainError> {
    let events = parse_events(records)?;
    longest_streaks(&events)
}

fn record_streak(best: &mut StreakResult, user_id: &UserId, candidate: u32) {
    let stored = best.entry(user_id.clone()).or_insert(0);
    *stored = (*stored).max(candidate);
}
