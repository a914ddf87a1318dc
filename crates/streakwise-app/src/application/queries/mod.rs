mod activity_streak_queries;

pub use activity_streak_queries::ActivityStreakQueries;
