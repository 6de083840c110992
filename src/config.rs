use std::fs;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{BucketSpec, DayKeyCalculator, DEFAULT_ROLLOVER_HOUR};

pub const DEFAULT_TIMEZONE: &str = "Asia/Seoul";
pub const DEFAULT_CARDS_PATH: &str = "cards.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("Rollover hour must be between 0 and 23, got {0}")]
    InvalidRolloverHour(u32),

    #[error("At least one bucket must be configured")]
    NoBuckets,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Daily selection settings, read from `config.toml`
///
/// ```toml
/// timezone = "Asia/Seoul"
/// rollover_hour = 7
/// cards_path = "cards.json"
///
/// [[buckets]]
/// label = "English (short)"
/// lang = "en"
/// sub_tag = { field = "length", equals = "short" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyConfig {
    /// IANA timezone the study day is measured in
    pub timezone: String,
    /// Local hour at which the study day starts
    pub rollover_hour: u32,
    /// Card pool document; relative paths resolve against the working directory
    pub cards_path: PathBuf,
    /// Daily slots, drawn in this order
    pub buckets: Vec<BucketSpec>,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            rollover_hour: DEFAULT_ROLLOVER_HOUR,
            cards_path: PathBuf::from(DEFAULT_CARDS_PATH),
            buckets: BucketSpec::default_buckets(),
        }
    }
}

impl DailyConfig {
    /// Default config file location (e.g., ~/.config/daily-cards/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("daily-cards").join("config.toml"))
    }

    /// Load an explicit config file; a missing file is an error
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load the given file, else the default location if it exists, else defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every setting that would otherwise fail later
    pub fn validate(&self) -> Result<()> {
        self.timezone()?;
        if self.rollover_hour > 23 {
            return Err(ConfigError::InvalidRolloverHour(self.rollover_hour));
        }
        if self.buckets.is_empty() {
            return Err(ConfigError::NoBuckets);
        }
        Ok(())
    }

    pub fn timezone(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(self.timezone.clone()))
    }

    pub fn calculator(&self) -> Result<DayKeyCalculator> {
        if self.rollover_hour > 23 {
            return Err(ConfigError::InvalidRolloverHour(self.rollover_hour));
        }
        Ok(DayKeyCalculator::new(self.timezone()?).with_rollover_hour(self.rollover_hour))
    }
}
