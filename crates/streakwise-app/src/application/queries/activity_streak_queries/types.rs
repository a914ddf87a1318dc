use chrono::NaiveDate;

pub struct StreakComputation {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_active_days: u32,
    pub last_active_date: Option<NaiveDate>,
}

/// One distinct active day for a user.
pub struct DailyActivityRow {
    pub date: NaiveDate,
    pub event_count: u32,
}
