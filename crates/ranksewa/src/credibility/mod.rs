//! Review credibility from community signals.
//!
//! Each review earns or loses points for signals that separate first-hand patient
//! accounts from drive-by or copied reviews. The point total maps onto a tier, and
//! suspicious reviews are flagged for a moderator.

mod content;

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Community signal contributing to a review's credibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredibilitySignal {
    VerifiedInteraction,
    UnverifiedInteraction,
    AccountHistory3Plus,
    FirstTimeReviewer,
    AccountAge6Months,
    NewAccount24h,
    ReviewLength50Plus,
    ContentSpecificity,
    DuplicateContent,
}

impl CredibilitySignal {
    pub fn points(&self) -> i32 {
        match self {
            CredibilitySignal::VerifiedInteraction => 30,
            CredibilitySignal::AccountHistory3Plus => 15,
            CredibilitySignal::ContentSpecificity => 10,
            CredibilitySignal::AccountAge6Months => 10,
            CredibilitySignal::ReviewLength50Plus => 5,
            CredibilitySignal::FirstTimeReviewer => -10,
            CredibilitySignal::UnverifiedInteraction => -20,
            CredibilitySignal::NewAccount24h => -15,
            CredibilitySignal::DuplicateContent => -50,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CredibilitySignal::VerifiedInteraction => "verified_interaction",
            CredibilitySignal::UnverifiedInteraction => "unverified_interaction",
            CredibilitySignal::AccountHistory3Plus => "account_history_3plus",
            CredibilitySignal::FirstTimeReviewer => "first_time_reviewer",
            CredibilitySignal::AccountAge6Months => "account_age_6months",
            CredibilitySignal::NewAccount24h => "new_account_24h",
            CredibilitySignal::ReviewLength50Plus => "review_length_50plus",
            CredibilitySignal::ContentSpecificity => "content_specificity",
            CredibilitySignal::DuplicateContent => "duplicate_content",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredibilityTier {
    Suspicious,
    Neutral,
    Trusted,
    VerifiedPatient,
}

impl CredibilityTier {
    pub fn from_score(score: i32) -> Self {
        if score >= 40 {
            CredibilityTier::VerifiedPatient
        } else if score >= 20 {
            CredibilityTier::Trusted
        } else if score >= 0 {
            CredibilityTier::Neutral
        } else {
            CredibilityTier::Suspicious
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CredibilityTier::VerifiedPatient => "verified_patient",
            CredibilityTier::Trusted => "trusted",
            CredibilityTier::Neutral => "neutral",
            CredibilityTier::Suspicious => "suspicious",
        }
    }
}

impl fmt::Display for CredibilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the caller knows about a review and its author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewContext {
    /// The review is tied to a booked appointment.
    pub has_appointment: bool,
    /// Reviews by the author, including this one.
    pub author_review_count: u32,
    pub author_created_at: DateTime<Utc>,
    pub comment: Option<String>,
    /// Other comments left for the same doctor.
    #[serde(default)]
    pub other_comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityAssessment {
    pub score: i32,
    pub tier: CredibilityTier,
    pub signals: Vec<CredibilitySignal>,
    /// Suspicious reviews are held for moderator attention.
    pub flagged: bool,
}

pub fn assess(review: &ReviewContext) -> CredibilityAssessment {
    assess_at(review, Utc::now())
}

pub fn assess_at(review: &ReviewContext, now: DateTime<Utc>) -> CredibilityAssessment {
    let signals = collect_signals(review, now);
    let score = signals.iter().map(CredibilitySignal::points).sum();
    let tier = CredibilityTier::from_score(score);
    let flagged = tier == CredibilityTier::Suspicious;

    if flagged {
        warn!(score, signals = ?signals, "review flagged as suspicious");
    }

    CredibilityAssessment {
        score,
        tier,
        signals,
        flagged,
    }
}

fn collect_signals(review: &ReviewContext, now: DateTime<Utc>) -> Vec<CredibilitySignal> {
    let mut signals = Vec::new();

    if review.has_appointment {
        signals.push(CredibilitySignal::VerifiedInteraction);
    } else {
        signals.push(CredibilitySignal::UnverifiedInteraction);
    }

    if review.author_review_count >= 3 {
        signals.push(CredibilitySignal::AccountHistory3Plus);
    }

    if review.author_review_count == 1 {
        signals.push(CredibilitySignal::FirstTimeReviewer);
    }

    let account_age = now.signed_duration_since(review.author_created_at);
    if account_age > Duration::days(180) {
        signals.push(CredibilitySignal::AccountAge6Months);
    }

    if account_age < Duration::hours(24) {
        signals.push(CredibilitySignal::NewAccount24h);
    }

    let comment = review.comment.as_deref().unwrap_or_default();

    if comment.trim().chars().count() > 50 {
        signals.push(CredibilitySignal::ReviewLength50Plus);
    }

    if content::has_specific_content(comment) {
        signals.push(CredibilitySignal::ContentSpecificity);
    }

    if content::is_duplicate_content(comment, review.other_comments.iter().map(String::as_str)) {
        signals.push(CredibilitySignal::DuplicateContent);
    }

    signals
}

/// Tier counts over a batch of assessments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTally {
    pub total: usize,
    pub verified_patient: usize,
    pub trusted: usize,
    pub neutral: usize,
    pub suspicious: usize,
}

impl TierTally {
    pub fn record(&mut self, tier: CredibilityTier) {
        self.total += 1;
        match tier {
            CredibilityTier::VerifiedPatient => self.verified_patient += 1,
            CredibilityTier::Trusted => self.trusted += 1,
            CredibilityTier::Neutral => self.neutral += 1,
            CredibilityTier::Suspicious => self.suspicious += 1,
        }
    }
}

impl<'a> FromIterator<&'a CredibilityAssessment> for TierTally {
    fn from_iter<I: IntoIterator<Item = &'a CredibilityAssessment>>(iter: I) -> Self {
        let mut tally = TierTally::default();
        for assessment in iter {
            tally.record(assessment.tier);
        }
        tally
    }
}
