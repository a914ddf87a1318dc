use std::collections::BTreeMap;

use chrono::NaiveDate;

use streakwise_domain::activity::ActivityEvent;
use streakwise_domain::shared::UserId;

use super::types::DailyActivityRow;

/// Distinct user ids in the feed, ascending.
pub fn all_user_ids(events: &[ActivityEvent]) -> Vec<UserId> {
    let mut ids: Vec<UserId> = Vec::new();
    for event in events {
        if !ids.contains(event.user_id()) {
            ids.push(event.user_id().clone());
        }
    }
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    ids
}

/// Collapse a user's events into distinct active days, ascending by date.
pub fn daily_activity(events: &[ActivityEvent], user_id: &UserId) -> Vec<DailyActivityRow> {
    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for event in events.iter().filter(|e| e.user_id() == user_id) {
        *per_day.entry(event.date()).or_insert(0) += 1;
    }

    per_day
        .into_iter()
        .map(|(date, event_count)| DailyActivityRow { date, event_count })
        .collect()
}
