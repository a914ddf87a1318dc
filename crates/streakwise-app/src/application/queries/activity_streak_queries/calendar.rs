use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use log::{info, warn};

use streakwise_domain::activity::ActivityEvent;
use streakwise_domain::shared::{DomainError, UserId};

use crate::application::dtos::{ActivityCalendarDto, ActivityDayDto, MonthStatsDto};

use super::helpers;

/// Get the activity calendar for a specific month
pub fn get_calendar(
    events: &[ActivityEvent],
    user_id: &str,
    year: i32,
    month: u32,
) -> Result<ActivityCalendarDto, DomainError> {
    // Validate inputs
    if !(1..=12).contains(&month) {
        return Err(DomainError::Validation("Invalid month".to_string()));
    }

    // Calculate the first and last day of the month
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DomainError::Validation("Invalid date".to_string()))?;

    let first_day_next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last_day = first_day_next_month
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| DomainError::Validation("Invalid date".to_string()))?;

    // Build a map for quick lookup
    let user = UserId::from_string(user_id);
    let mut daily_map: HashMap<NaiveDate, u32> = HashMap::new();
    for row in helpers::daily_activity(events, &user) {
        if row.date >= first_day && row.date <= last_day {
            daily_map.insert(row.date, row.event_count);
        }
    }

    if daily_map.is_empty() {
        warn!(
            "[streak] calendar query empty result user_id={} month={:04}-{:02}",
            user_id, year, month
        );
    } else {
        info!(
            "[streak] calendar query user_id={} month={:04}-{:02} active_days={}",
            user_id,
            year,
            month,
            daily_map.len()
        );
    }

    let total_days = last_day.day();
    let mut days = Vec::new();
    let mut active_days = 0u32;

    for day in 1..=total_days {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DomainError::Validation("Invalid date".to_string()))?;
        let event_count = daily_map.get(&date).copied().unwrap_or(0);
        let is_active = event_count > 0;

        if is_active {
            active_days += 1;
        }

        days.push(ActivityDayDto {
            date: date.format("%Y-%m-%d").to_string(),
            is_active,
            event_count,
        });
    }

    let activity_rate = if total_days > 0 {
        (active_days as f64 / total_days as f64) * 100.0
    } else {
        0.0
    };

    let month_stats = MonthStatsDto {
        total_days,
        active_days,
        activity_rate,
    };

    let dto = ActivityCalendarDto {
        user_id: user_id.to_string(),
        year,
        month,
        days,
        month_stats,
    };

    info!(
        "[streak] calendar result user_id={} active_days={} rate={:.2}%",
        dto.user_id, dto.month_stats.active_days, dto.month_stats.activity_rate
    );

    Ok(dto)
}
