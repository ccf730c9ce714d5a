use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::ModerationConfig;
use super::wordlist::ProfanityOracle;

/// Heuristic violation attached to a piece of review text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueTag {
    ContainsProfanity,
    TooShort,
    TooLong,
    AllCaps,
    Repetitive,
    ContainsUrl,
}

impl IssueTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueTag::ContainsProfanity => "contains_profanity",
            IssueTag::TooShort => "too_short",
            IssueTag::TooLong => "too_long",
            IssueTag::AllCaps => "all_caps",
            IssueTag::Repetitive => "repetitive",
            IssueTag::ContainsUrl => "contains_url",
        }
    }
}

impl fmt::Display for IssueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of running every heuristic over one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCheck {
    pub is_clean: bool,
    pub issues: Vec<IssueTag>,
    /// For logs only, never shown to reviewers.
    pub censored_text: String,
}

const URL_MARKERS: [&str; 3] = ["http://", "https://", "www."];

pub(crate) fn check_content(
    text: &str,
    config: &ModerationConfig,
    oracle: &dyn ProfanityOracle,
) -> ContentCheck {
    let mut issues = Vec::new();
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let char_count = text.chars().count();

    if oracle.contains_profanity(text) {
        issues.push(IssueTag::ContainsProfanity);
    }

    if tokens.len() < config.min_words {
        issues.push(IssueTag::TooShort);
    }

    if char_count > config.max_chars {
        issues.push(IssueTag::TooLong);
    }

    if is_upper(text) && char_count > config.caps_min_chars {
        issues.push(IssueTag::AllCaps);
    }

    if is_repetitive(&tokens, config) {
        issues.push(IssueTag::Repetitive);
    }

    let lowered = text.to_lowercase();
    if URL_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        issues.push(IssueTag::ContainsUrl);
    }

    ContentCheck {
        is_clean: issues.is_empty(),
        issues,
        censored_text: oracle.censor(text),
    }
}

/// At least one cased character and no lower-case ones; digits and punctuation are ignored.
fn is_upper(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// Tokens are compared verbatim: case and punctuation make words distinct.
fn is_repetitive(tokens: &[&str], config: &ModerationConfig) -> bool {
    if tokens.len() <= config.repetition_min_tokens {
        return false;
    }

    let distinct = tokens.iter().collect::<HashSet<_>>().len();
    (distinct as f64 / tokens.len() as f64) < config.repetition_max_unique_ratio
}
