use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use daily_cards_lib::cards::{CardPool, CardPoolStorage, DayKey, DayKeyCalculator};
use daily_cards_lib::DailyConfig;

/// Shared application state for CLI commands
pub struct App {
    pub config: DailyConfig,
    pub calculator: DayKeyCalculator,
}

impl App {
    /// Resolve config and validate the timezone up front; a bad zone stops here
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = DailyConfig::resolve(config_path).context("Failed to load configuration")?;
        let calculator = config
            .calculator()
            .context("Invalid day-key settings in configuration")?;

        Ok(Self { config, calculator })
    }

    /// Day key for the given instant
    pub fn day_key(&self, now: DateTime<Utc>) -> DayKey {
        self.calculator.day_key(now)
    }

    /// Load the card pool from `cards_override`, or from `cards_path` in config
    pub fn load_pool(&self, cards_override: Option<&Path>) -> Result<CardPool> {
        let path = cards_override.unwrap_or(&self.config.cards_path);
        CardPoolStorage::new(path.to_path_buf())
            .load()
            .with_context(|| format!("Failed to load card pool from {}", path.display()))
    }
}
