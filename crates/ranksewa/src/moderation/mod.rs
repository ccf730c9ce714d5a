//! Review moderation heuristics.
//!
//! Every check runs on each non-blank field and any number of issues may be reported.
//! Only the highest-priority issue is turned into a message for the reviewer.

mod checks;
mod config;
mod policy;
mod wordlist;

#[cfg(test)]
mod tests;

pub use checks::{ContentCheck, IssueTag};
pub use config::ModerationConfig;
pub use policy::ModerationResult;
pub use wordlist::{ProfanityOracle, WordList, WordListError};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The two free-text fields of a review submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewText {
    pub rating_text: Option<String>,
    pub comment_text: Option<String>,
}

/// Moderation entry point holding the shared word list and thresholds.
#[derive(Clone)]
pub struct ContentModerator {
    oracle: Arc<dyn ProfanityOracle>,
    config: ModerationConfig,
}

impl ContentModerator {
    pub fn new(oracle: Arc<dyn ProfanityOracle>, config: ModerationConfig) -> Self {
        Self { oracle, config }
    }

    /// Builds a moderator backed by the configured word list, or the built-in one.
    pub fn from_config(config: ModerationConfig) -> Result<Self, WordListError> {
        let list = match &config.wordlist_path {
            Some(path) => WordList::from_path(path)?,
            None => WordList::embedded(),
        };
        Ok(Self::new(Arc::new(list), config))
    }

    pub fn config(&self) -> &ModerationConfig {
        &self.config
    }

    pub fn oracle(&self) -> &dyn ProfanityOracle {
        self.oracle.as_ref()
    }

    pub fn check(&self, text: &str) -> ContentCheck {
        checks::check_content(text, &self.config, self.oracle.as_ref())
    }

    /// Screens a review before it is saved. Blank or missing fields are not checked.
    pub fn moderate(&self, rating_text: Option<&str>, comment_text: Option<&str>) -> ModerationResult {
        let mut issues = Vec::new();

        for text in [rating_text, comment_text].into_iter().flatten() {
            if text.trim().is_empty() {
                continue;
            }

            let check = self.check(text);
            if !check.is_clean {
                debug!(
                    issues = ?check.issues,
                    censored = %check.censored_text,
                    "review text flagged"
                );
            }
            issues.extend(check.issues);
        }

        policy::decide(issues, &self.config)
    }

    pub fn moderate_review(&self, review: &ReviewText) -> ModerationResult {
        self.moderate(review.rating_text.as_deref(), review.comment_text.as_deref())
    }
}

impl std::fmt::Debug for ContentModerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentModerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
