use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStreakDto {
    pub user_id: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_active_days: u32,
    pub last_active_date: Option<String>, // ISO 8601 date (YYYY-MM-DD)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDayDto {
    pub date: String, // YYYY-MM-DD
    pub is_active: bool,
    pub event_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityCalendarDto {
    pub user_id: String,
    pub year: i32,
    pub month: u32,
    pub days: Vec<ActivityDayDto>,
    pub month_stats: MonthStatsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthStatsDto {
    pub total_days: u32,
    pub active_days: u32,
    pub activity_rate: f64, // percentage (0.0 - 100.0)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityTrendDto {
    pub user_id: String,
    pub start_date: String,
    pub end_date: String,
    pub data_points: Vec<TrendDataPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendDataPoint {
    pub date: String,
    pub event_count: u32,
    pub is_active: bool,
}
