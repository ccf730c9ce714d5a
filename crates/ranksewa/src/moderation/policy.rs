use serde::{Deserialize, Serialize};

use super::checks::IssueTag;
use super::config::ModerationConfig;

pub(crate) const FALLBACK_MESSAGE: &str = "Your review doesn't meet our community guidelines.";

/// Decision returned to the review form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationResult {
    pub approved: bool,
    /// Rating text issues first, then comment issues. Duplicates are kept.
    pub issues: Vec<IssueTag>,
    /// Empty when approved.
    pub message: String,
}

impl ModerationResult {
    pub fn approved() -> Self {
        Self {
            approved: true,
            issues: Vec::new(),
            message: String::new(),
        }
    }

    pub fn has_issue(&self, tag: IssueTag) -> bool {
        self.issues.contains(&tag)
    }
}

/// Reviewer-facing messages, highest priority first.
pub(crate) fn message_table(config: &ModerationConfig) -> [(IssueTag, String); 6] {
    [
        (
            IssueTag::ContainsProfanity,
            "Please keep your review professional and avoid inappropriate language.".to_string(),
        ),
        (
            IssueTag::TooShort,
            "Please write at least a few words about your experience.".to_string(),
        ),
        (
            IssueTag::TooLong,
            format!(
                "Your review is too long. Please keep it under {} characters.",
                config.max_chars
            ),
        ),
        (
            IssueTag::AllCaps,
            "Please don't write in all capital letters.".to_string(),
        ),
        (
            IssueTag::Repetitive,
            "Your review appears repetitive. Please write a genuine experience.".to_string(),
        ),
        (
            IssueTag::ContainsUrl,
            "Please don't include links in your review.".to_string(),
        ),
    ]
}

/// Picks the single message for the highest-priority issue present.
pub(crate) fn select_message(issues: &[IssueTag], config: &ModerationConfig) -> String {
    if issues.is_empty() {
        return String::new();
    }

    message_table(config)
        .into_iter()
        .find(|(tag, _)| issues.contains(tag))
        .map(|(_, message)| message)
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

pub(crate) fn decide(issues: Vec<IssueTag>, config: &ModerationConfig) -> ModerationResult {
    if issues.is_empty() {
        return ModerationResult::approved();
    }

    let message = select_message(&issues, config);
    ModerationResult {
        approved: false,
        issues,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_tag_once() {
        let table = message_table(&ModerationConfig::default());
        let tags: Vec<_> = table.iter().map(|(tag, _)| *tag).collect();
        assert_eq!(
            tags,
            vec![
                IssueTag::ContainsProfanity,
                IssueTag::TooShort,
                IssueTag::TooLong,
                IssueTag::AllCaps,
                IssueTag::Repetitive,
                IssueTag::ContainsUrl,
            ]
        );
    }

    #[test]
    fn profanity_outranks_everything() {
        let config = ModerationConfig::default();
        let message = select_message(
            &[IssueTag::ContainsUrl, IssueTag::TooShort, IssueTag::ContainsProfanity],
            &config,
        );
        assert!(message.contains("inappropriate language"));
    }

    #[test]
    fn too_long_message_names_the_limit() {
        let config = ModerationConfig {
            max_chars: 500,
            ..ModerationConfig::default()
        };
        let message = select_message(&[IssueTag::TooLong], &config);
        assert_eq!(
            message,
            "Your review is too long. Please keep it under 500 characters."
        );
    }

    #[test]
    fn no_issues_means_no_message() {
        let result = decide(Vec::new(), &ModerationConfig::default());
        assert_eq!(result, ModerationResult::approved());
    }
}
