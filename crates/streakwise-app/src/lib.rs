// Application layer - queries and DTOs over parsed activity feeds
// Depends only on the domain layer

pub mod application;

// Re-exports for convenience
pub use application::dtos::{
    ActivityCalendarDto, ActivityDayDto, ActivityTrendDto, MonthStatsDto, TrendDataPoint,
    UserStreakDto,
};
pub use application::queries::ActivityStreakQueries;
