mod calculator;


pub use calculator::{
    day_difference, longest_streaks, longest_streaks_from_records, StreakResult,
};
