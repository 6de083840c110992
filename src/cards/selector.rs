//! Daily selection
//!
//! Each bucket is a filtered view of the pool. One stream seeded by the day
//! key is shared across all buckets and consumed in bucket order, so the
//! order of the bucket list is part of the result: swapping two buckets
//! swaps which draw each one receives.
//!
//! A bucket with no candidates fails the whole selection before any draw
//! is taken for it. There are no partial results.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::{Card, DayKey};
use super::stream::DeterministicStream;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No candidate cards for bucket: {label}")]
    NoCandidates { label: String },
}

pub type Result<T> = std::result::Result<T, SelectionError>;

/// Optional sub-tag condition on top of the category match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum SubTagFilter {
    /// Category match only
    #[default]
    Any,
    /// `length` equals the given value; cards without a length never match
    Length { equals: String },
    /// `level` starts with the given prefix; cards without a level never match
    LevelPrefix { prefix: String },
}

impl SubTagFilter {
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            Self::Any => true,
            Self::Length { equals } => card.length.as_deref() == Some(equals.as_str()),
            Self::LevelPrefix { prefix } => card
                .level
                .as_deref()
                .is_some_and(|level| level.starts_with(prefix.as_str())),
        }
    }
}

/// One daily slot: a labelled predicate over the pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSpec {
    /// Human-readable name used in diagnostics
    pub label: String,
    /// Category tag the card's `lang` must equal
    pub lang: String,
    #[serde(default)]
    pub sub_tag: SubTagFilter,
}

impl BucketSpec {
    pub fn new(label: impl Into<String>, lang: impl Into<String>, sub_tag: SubTagFilter) -> Self {
        Self {
            label: label.into(),
            lang: lang.into(),
            sub_tag,
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        card.lang == self.lang && self.sub_tag.matches(card)
    }

    /// Matching cards in pool order
    pub fn candidates<'a>(&self, pool: &'a [Card]) -> Vec<&'a Card> {
        pool.iter().filter(|card| self.matches(card)).collect()
    }

    /// English short, English long, Japanese N3+
    pub fn default_buckets() -> Vec<BucketSpec> {
        vec![
            BucketSpec::new(
                "English (short)",
                "en",
                SubTagFilter::Length {
                    equals: "short".to_string(),
                },
            ),
            BucketSpec::new(
                "English (long)",
                "en",
                SubTagFilter::Length {
                    equals: "long".to_string(),
                },
            ),
            BucketSpec::new(
                "Japanese (N3+)",
                "jp",
                SubTagFilter::LevelPrefix {
                    prefix: "N3".to_string(),
                },
            ),
        ]
    }
}

/// Pick one card per bucket for `day_key`
pub fn select_daily<'a>(
    pool: &'a [Card],
    day_key: &DayKey,
    bucket_specs: &[BucketSpec],
) -> Result<Vec<&'a Card>> {
    log::info!("Selecting daily cards for {}", day_key);
    let mut stream = DeterministicStream::new(&day_key.as_seed());
    select_with_stream(pool, &mut stream, bucket_specs)
}

/// Pick one card per bucket, drawing from `stream` in bucket order
pub fn select_with_stream<'a>(
    pool: &'a [Card],
    stream: &mut DeterministicStream,
    bucket_specs: &[BucketSpec],
) -> Result<Vec<&'a Card>> {
    let mut picked = Vec::with_capacity(bucket_specs.len());

    for spec in bucket_specs {
        let candidates = spec.candidates(pool);
        if candidates.is_empty() {
            log::error!("Bucket '{}' has no candidates in a pool of {}", spec.label, pool.len());
            return Err(SelectionError::NoCandidates {
                label: spec.label.clone(),
            });
        }

        let index = stream.pick_index(candidates.len());
        log::debug!(
            "Bucket '{}': picked {} of {} ({})",
            spec.label,
            index,
            candidates.len(),
            candidates[index].word
        );
        picked.push(candidates[index]);
    }

    Ok(picked)
}
