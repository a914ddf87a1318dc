mod streak_dto;

pub use streak_dto::{
    ActivityCalendarDto, ActivityDayDto, ActivityTrendDto, MonthStatsDto, TrendDataPoint,
    UserStreakDto,
};
