//! Data models for the daily card pool

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format of a day key (`YYYY-MM-DD`)
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// A single language card as stored in the pool document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub word: String,
    pub situation: String,
    pub example: String,
    pub sentence: String,
    pub meaning: String,
    /// Category tag ("en", "jp", ...)
    pub lang: String,
    /// Sub-tag for English cards ("short" / "long")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    /// Proficiency level for Japanese cards ("N3", "N3+", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Card {
    /// Fields every card must carry with non-blank content, paired with their accessor.
    fn required_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("lang", &self.lang),
            ("word", &self.word),
            ("situation", &self.situation),
            ("example", &self.example),
            ("sentence", &self.sentence),
            ("meaning", &self.meaning),
        ]
    }

    /// Name of the first required field that is empty or whitespace-only
    pub fn first_blank_field(&self) -> Option<&'static str> {
        self.required_fields()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }
}

/// The ordered card pool; cards have no identity beyond their position
pub type CardPool = Vec<Card>;

/// Calendar day used as the seed for the daily draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a `YYYY-MM-DD` string, rejecting impossible dates
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(s, DAY_KEY_FORMAT).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The seed string fed to the stream
    pub fn as_seed(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DayKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
