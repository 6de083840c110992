//! Card pool loading
//!
//! The pool is a single JSON document holding an array of cards:
//! ```text
//! [
//!   { "lang": "en", "length": "short", "word": ..., "situation": ...,
//!     "example": ..., "sentence": ..., "meaning": ... },
//!   { "lang": "jp", "level": "N3+", ... }
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::{Card, CardPool};

#[derive(Error, Debug)]
pub enum CardPoolError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Card {index} is missing or has an empty field: {field}")]
    InvalidCard { index: usize, field: &'static str },
}

pub type Result<T> = std::result::Result<T, CardPoolError>;

/// Reads the card pool document from disk
pub struct CardPoolStorage {
    path: PathBuf,
}

impl CardPoolStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, parse and validate the pool
    pub fn load(&self) -> Result<CardPool> {
        let content = fs::read_to_string(&self.path).map_err(|source| CardPoolError::Io {
            path: self.path.clone(),
            source,
        })?;

        let pool = load_from_str(&content)?;
        log::info!("Loaded {} cards from {:?}", pool.len(), self.path);
        Ok(pool)
    }
}

/// Parse and validate a pool document already held in memory
pub fn load_from_str(content: &str) -> Result<CardPool> {
    let pool: CardPool = serde_json::from_str(content)?;
    validate(&pool)?;
    Ok(pool)
}

/// Every card needs non-blank lang, word, situation, example, sentence and meaning
pub fn validate(pool: &[Card]) -> Result<()> {
    for (index, card) in pool.iter().enumerate() {
        if let Some(field) = card.first_blank_field() {
            log::warn!("Rejecting card pool: card {} has empty field '{}'", index, field);
            return Err(CardPoolError::InvalidCard { index, field });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"[
        {"lang":"en","length":"short","word":"Heads up","situation":"Warning someone",
         "example":"A colleague is about to walk into a meeting","sentence":"Heads up, the client is early.",
         "meaning":"미리 알려줄게"},
        {"lang":"jp","level":"N3+","word":"念のため","situation":"Double-checking",
         "example":"Confirming a schedule by email","sentence":"念のため、もう一度確認します。",
         "meaning":"혹시 모르니까"}
    ]"#;

    fn create_test_storage(content: &str) -> (CardPoolStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cards.json");
        fs::write(&path, content).unwrap();
        (CardPoolStorage::new(path), temp_dir)
    }

    #[test]
    fn test_load_pool() {
        let (storage, _temp) = create_test_storage(SAMPLE);

        let pool = storage.load().unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].word, "Heads up");
        assert_eq!(pool[0].length.as_deref(), Some("short"));
        assert_eq!(pool[1].lang, "jp");
        assert_eq!(pool[1].level.as_deref(), Some("N3+"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = CardPoolStorage::new(temp_dir.path().join("nope.json"));

        let err = storage.load().unwrap_err();
        assert!(matches!(err, CardPoolError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let (storage, _temp) = create_test_storage("{ not json");
        assert!(matches!(storage.load().unwrap_err(), CardPoolError::Json(_)));
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let result = load_from_str(r#"[{"lang":"en","word":"w"}]"#);
        assert!(matches!(result, Err(CardPoolError::Json(_))));
    }

    #[test]
    fn test_blank_field_rejected() {
        let result = load_from_str(
            r#"[{"lang":"en","word":"ok","situation":"s","example":"e","sentence":"x","meaning":"m"},
                {"lang":"en","word":"   ","situation":"s","example":"e","sentence":"x","meaning":"m"}]"#,
        );
        match result {
            Err(CardPoolError::InvalidCard { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "word");
            }
            other => panic!("expected InvalidCard, got {:?}", other),
        }
    }

    #[test]
    fn test_null_optional_tags() {
        let pool = load_from_str(
            r#"[{"lang":"jp","level":null,"length":null,"word":"w","situation":"s","example":"e","sentence":"x","meaning":"m"}]"#,
        )
        .unwrap();
        assert_eq!(pool[0].level, None);
    }

    #[test]
    fn test_empty_pool_is_valid() {
        assert!(load_from_str("[]").unwrap().is_empty());
    }
}
