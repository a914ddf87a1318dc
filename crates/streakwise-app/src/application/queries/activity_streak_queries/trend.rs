use std::collections::HashMap;

use chrono::NaiveDate;
use log::{info, warn};

use streakwise_domain::activity::ActivityEvent;
use streakwise_domain::shared::{DomainError, UserId};

use crate::application::dtos::{ActivityDayDto, ActivityTrendDto, TrendDataPoint};

use super::helpers;

/// Get activity trend data over the window of `days` ending at `end_date`
pub fn get_trend(
    events: &[ActivityEvent],
    user_id: &str,
    end_date: &str,
    days: u32,
) -> Result<ActivityTrendDto, DomainError> {
    if days == 0 || days > 365 {
        return Err(DomainError::Validation(
            "Days must be between 1 and 365".to_string(),
        ));
    }

    let end = parse_date(end_date)?;
    let start = end - chrono::Duration::days(days as i64 - 1);

    let user = UserId::from_string(user_id);
    let per_day: HashMap<NaiveDate, u32> = helpers::daily_activity(events, &user)
        .into_iter()
        .map(|row| (row.date, row.event_count))
        .collect();

    let mut data_points = Vec::new();
    for date in start.iter_days().take(days as usize) {
        let event_count = per_day.get(&date).copied().unwrap_or(0);
        data_points.push(TrendDataPoint {
            date: date.format("%Y-%m-%d").to_string(),
            event_count,
            is_active: event_count > 0,
        });
    }

    let dto = ActivityTrendDto {
        user_id: user_id.to_string(),
        start_date: start.format("%Y-%m-%d").to_string(),
        end_date: end.format("%Y-%m-%d").to_string(),
        data_points,
    };

    info!(
        "[streak] trend query user_id={} range={}~{} points={}",
        dto.user_id,
        dto.start_date,
        dto.end_date,
        dto.data_points.len()
    );

    if !dto.data_points.iter().any(|p| p.is_active) {
        warn!("[streak] trend result empty user_id={}", dto.user_id);
    }

    Ok(dto)
}

/// Get details for a specific day
pub fn get_day_detail(
    events: &[ActivityEvent],
    user_id: &str,
    date: &str,
) -> Result<ActivityDayDto, DomainError> {
    let parsed_date = parse_date(date)?;

    let user = UserId::from_string(user_id);
    let event_count = events
        .iter()
        .filter(|e| e.user_id() == &user && e.date() == parsed_date)
        .count() as u32;

    if event_count == 0 {
        warn!(
            "[streak] day detail no activity user_id={} date={}",
            user_id, date
        );
    }

    Ok(ActivityDayDto {
        date: date.to_string(),
        is_active: event_count > 0,
        event_count,
    })
}

fn parse_date(date: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        DomainError::Validation("Invalid date format, expected YYYY-MM-DD".to_string())
    })
}
