pub mod day_key;
pub mod today;
