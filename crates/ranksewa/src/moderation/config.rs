use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Thresholds for the review text heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationConfig {
    /// Fewer whitespace-separated words than this is `too_short`.
    pub min_words: usize,
    /// More characters than this is `too_long`.
    pub max_chars: usize,
    /// Upper-case text is only `all_caps` beyond this many characters.
    pub caps_min_chars: usize,
    pub repetition_min_tokens: usize,
    pub repetition_max_unique_ratio: f64,
    /// Custom profanity list; the built-in list is used when unset.
    pub wordlist_path: Option<PathBuf>,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            min_words: 2,
            max_chars: 2000,
            caps_min_chars: 20,
            repetition_min_tokens: 5,
            repetition_max_unique_ratio: 0.30,
            wordlist_path: None,
        }
    }
}
