use chrono::NaiveDate;
use log::info;

use streakwise_domain::activity::ActivityEvent;
use streakwise_domain::shared::{DomainError, UserId};

use crate::application::dtos::UserStreakDto;

use super::helpers;
use super::types::{DailyActivityRow, StreakComputation};

/// Get streak statistics for a single user
pub fn streak_stats(
    events: &[ActivityEvent],
    user_id: &str,
) -> Result<UserStreakDto, DomainError> {
    let user = UserId::from_string(user_id);
    let rows = helpers::daily_activity(events, &user);
    if rows.is_empty() {
        return Err(DomainError::UserNotFound(user_id.to_string()));
    }

    let streak = calculate_streak_stats(&rows);
    let dto = to_dto(&user, &streak);

    info!(
        "[streak] streak_stats user_id={} current={} longest={} total={}",
        dto.user_id, dto.current_streak, dto.longest_streak, dto.total_active_days
    );

    Ok(dto)
}

/// Get streak statistics for all users
pub fn all_streaks(events: &[ActivityEvent]) -> Result<Vec<UserStreakDto>, DomainError> {
    let users = helpers::all_user_ids(events);
    if users.is_empty() {
        return Err(DomainError::EmptyInput(
            "activity feed contains no events".to_string(),
        ));
    }

    let mut results = Vec::new();
    for user in users {
        let rows = helpers::daily_activity(events, &user);
        let streak = calculate_streak_stats(&rows);
        results.push(to_dto(&user, &streak));
    }

    results.sort_by(|a, b| b.current_streak.cmp(&a.current_streak));

    info!("[streak] all_streaks total_users={}", results.len());
    Ok(results)
}

// Unlike the feed-order scan in the domain layer, this view isolates each
// user: only their own active days decide where runs break.
fn calculate_streak_stats(rows: &[DailyActivityRow]) -> StreakComputation {
    let mut current_streak = 0u32;
    let mut longest_streak = 0u32;
    let mut total_active_days = 0u32;
    let mut last_active_date: Option<NaiveDate> = None;

    for row in rows {
        current_streak = match last_active_date {
            Some(prev_date) if (row.date - prev_date).num_days() == 1 => current_streak + 1,
            _ => 1,
        };

        longest_streak = longest_streak.max(current_streak);
        total_active_days += 1;
        last_active_date = Some(row.date);
    }

    StreakComputation {
        current_streak,
        longest_streak,
        total_active_days,
        last_active_date,
    }
}

fn to_dto(user: &UserId, streak: &StreakComputation) -> UserStreakDto {
    UserStreakDto {
        user_id: user.to_string(),
        current_streak: streak.current_streak,
        longest_streak: streak.longest_streak,
        total_active_days: streak.total_active_days,
        last_active_date: streak
            .last_active_date
            .map(|d| d.format("%Y-%m-%d").to_string()),
    }
}
