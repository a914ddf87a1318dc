use std::collections::HashMap;

use streakwise_domain::activity::{parse_events, ActivityEvent, ActivityRecord};
use streakwise_domain::shared::DomainError;
use streakwise_domain::streak::longest_streaks;

use crate::application::dtos::{
    ActivityCalendarDto, ActivityDayDto, ActivityTrendDto, UserStreakDto,
};

mod calendar;
mod helpers;
mod stats;
mod trend;
mod types;


/// Query facade over a parsed activity feed.
///
/// The feed is parsed once at construction; every query after that is a pure
/// computation over the in-memory events.
pub struct ActivityStreakQueries {
    events: Vec<ActivityEvent>,
}

impl ActivityStreakQueries {
    /// Parse the raw feed up front; any unparseable timestamp rejects the
    /// whole feed.
    pub fn new(records: &[ActivityRecord]) -> Result<Self, DomainError> {
        let events = parse_events(records)?;
        Ok(Self { events })
    }

    /// Build the facade from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let records: Vec<ActivityRecord> = serde_json::from_str(json)
            .map_err(|e| DomainError::Deserialization(e.to_string()))?;
        Self::new(&records)
    }

    /// Longest consecutive-day streak per user, keyed by user id
    pub fn longest_streaks(&self) -> Result<HashMap<String, u32>, DomainError> {
        let result = longest_streaks(&self.events)?;
        Ok(result
            .into_iter()
            .map(|(user_id, streak)| (user_id.to_string(), streak))
            .collect())
    }

    /// Streak statistics for a single user
    pub fn streak_stats(&self, user_id: &str) -> Result<UserStreakDto, DomainError> {
        stats::streak_stats(&self.events, user_id)
    }

    /// Streak statistics for all users
    pub fn all_streaks(&self) -> Result<Vec<UserStreakDto>, DomainError> {
        stats::all_streaks(&self.events)
    }

    /// Activity calendar for a specific month
    pub fn get_calendar(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<ActivityCalendarDto, DomainError> {
        calendar::get_calendar(&self.events, user_id, year, month)
    }

    /// Activity trend over the window of `days` ending at `end_date`
    pub fn get_trend(
        &self,
        user_id: &str,
        end_date: &str,
        days: u32,
    ) -> Result<ActivityTrendDto, DomainError> {
        trend::get_trend(&self.events, user_id, end_date, days)
    }

    /// Details for a specific day
    pub fn get_day_detail(
        &self,
        user_id: &str,
        date: &str,
    ) -> Result<ActivityDayDto, DomainError> {
        trend::get_day_detail(&self.events, user_id, date)
    }
}
