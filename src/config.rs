//! Session configuration read from environment variables.
//!
//! - `FLASHCARD_SWIPE_THRESHOLD`: swipe threshold in drag units (default: 200)
//! - `FLASHCARD_UNITS_PER_COLUMN`: drag units per terminal column (default: 10)
//! - `FLASHCARD_UNITS_PER_ROW`: drag units per terminal row (default: 20)
//! - `FLASHCARD_KEY_STEP`: keyboard nudge in drag units (default: 50)
//! - `FLASHCARD_LOG_PATH`: append a JSONL session log to this file (default: off)
//!
//! Values that do not parse as positive finite numbers fall back to the default.

use crate::types::SWIPE_THRESHOLD;

#[derive(Debug, Clone, PartialEq)]
pub struct FlashcardConfig {
    pub swipe_threshold: f64,
    pub units_per_column: f64,
    pub units_per_row: f64,
    pub key_step: f64,
    pub log_path: Option<String>,
}

impl Default for FlashcardConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            units_per_column: 10.0,
            units_per_row: 20.0,
            key_step: 50.0,
            log_path: None,
        }
    }
}

impl FlashcardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let positive = |key: &str, default: f64| {
            lookup(key)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(default)
        };

        let log_path = lookup("FLASHCARD_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            swipe_threshold: positive("FLASHCARD_SWIPE_THRESHOLD", defaults.swipe_threshold),
            units_per_column: positive("FLASHCARD_UNITS_PER_COLUMN", defaults.units_per_column),
            units_per_row: positive("FLASHCARD_UNITS_PER_ROW", defaults.units_per_row),
            key_step: positive("FLASHCARD_KEY_STEP", defaults.key_step),
            log_path,
        }
    }
}
