pub mod cards;
pub mod config;

pub use cards::{
    compute_day_key, select_daily, BucketSpec, Card, CardPoolError, CardPoolStorage, DayKey,
    DayKeyCalculator, DeterministicStream, SelectionError, SubTagFilter,
};
pub use config::{ConfigError, DailyConfig};
