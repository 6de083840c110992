//! Day key calculation
//!
//! A study day runs from the rollover hour (07:00 by default) to just before
//! the rollover hour on the next calendar day, in the configured timezone.
//! Instants before the rollover hour belong to the previous day.

use chrono::{DateTime, Days, Timelike, Utc};
use chrono_tz::Tz;

use super::models::DayKey;

/// Local hour at which a new study day starts
pub const DEFAULT_ROLLOVER_HOUR: u32 = 7;

/// Day key for `now` in `timezone` with the default rollover hour
pub fn compute_day_key(now: DateTime<Utc>, timezone: Tz) -> DayKey {
    DayKeyCalculator::new(timezone).day_key(now)
}

/// Maps instants onto study days for one timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayKeyCalculator {
    timezone: Tz,
    rollover_hour: u32,
}

impl DayKeyCalculator {
    pub fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            rollover_hour: DEFAULT_ROLLOVER_HOUR,
        }
    }

    /// Override the rollover hour. Callers validate the range (0..=23);
    /// values above 23 shift every instant to the previous day.
    pub fn with_rollover_hour(mut self, rollover_hour: u32) -> Self {
        self.rollover_hour = rollover_hour;
        self
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn rollover_hour(&self) -> u32 {
        self.rollover_hour
    }

    pub fn day_key(&self, now: DateTime<Utc>) -> DayKey {
        let local = now.with_timezone(&self.timezone);
        let date = local.date_naive();

        let date = if local.hour() < self.rollover_hour {
            // NaiveDate::MIN has no previous day; clamp rather than panic
            date.checked_sub_days(Days::new(1)).unwrap_or(date)
        } else {
            date
        };

        DayKey::from_date(date)
    }
}
