//! Daily card selection for Daily Cards
//!
//! This module provides:
//! - Card pool models and JSON loading
//! - Timezone-aware day keys with a morning rollover
//! - A seeded Lehmer stream for reproducible draws
//! - Bucketed daily selection (one card per configured bucket)

pub mod day_key;
pub mod models;
pub mod selector;
pub mod storage;
pub mod stream;

pub use day_key::{compute_day_key, DayKeyCalculator, DEFAULT_ROLLOVER_HOUR};
pub use models::*;
pub use selector::{select_daily, select_with_stream, BucketSpec, SelectionError, SubTagFilter};
pub use storage::{CardPoolError, CardPoolStorage};
pub use stream::DeterministicStream;
