use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::factors::{account_age_bonus_at, account_age_days_at, response_rate};
use super::profile::{profile_completion, DoctorProfile};

pub const WEIGHT_RATING: f64 = 0.50;
pub const WEIGHT_PROFILE: f64 = 0.25;
pub const WEIGHT_RESPONSE: f64 = 0.15;
pub const WEIGHT_AGE: f64 = 0.10;

/// Top of the review rating scale.
pub const MAX_RATING: f64 = 5.0;

/// Maps a 0-5 rating onto [0.0, 1.0].
///
/// Doctors without a rating contribute nothing here and are not penalized further.
pub fn normalize_rating(rating_score: Option<f64>) -> f64 {
    match rating_score {
        Some(rating) if rating > 0.0 => (rating / MAX_RATING).min(1.0),
        _ => 0.0,
    }
}

/// Weighted ranking score in [0.0, 1.0].
pub fn composite_score(
    rating_score: Option<f64>,
    profile_completion: f64,
    response_rate: f64,
    account_age_bonus: f64,
) -> f64 {
    let total = normalize_rating(rating_score) * WEIGHT_RATING
        + unit(profile_completion) * WEIGHT_PROFILE
        + unit(response_rate) * WEIGHT_RESPONSE
        + unit(account_age_bonus) * WEIGHT_AGE;
    total.clamp(0.0, 1.0)
}

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}

/// Per-call numeric inputs for a doctor's ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingInputs {
    /// Bayesian weighted rating on the 0-5 scale.
    pub rating_score: Option<f64>,
    pub total_reviews: u32,
    pub total_responses: u32,
    pub account_created_at: Option<DateTime<Utc>>,
}

impl RankingInputs {
    pub fn for_profile(
        profile: &DoctorProfile,
        rating_score: Option<f64>,
        total_reviews: u32,
        total_responses: u32,
    ) -> Self {
        Self {
            rating_score,
            total_reviews,
            total_responses,
            account_created_at: profile.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingFactor {
    pub raw: f64,
    pub score: f64,
    pub weight: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCompletionFactor {
    pub score: f64,
    pub percent: u32,
    pub weight: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRateFactor {
    pub score: f64,
    pub percent: u32,
    pub reviews: u32,
    pub responses: u32,
    pub weight: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountAgeFactor {
    pub score: f64,
    pub days: i64,
    pub weight: f64,
    pub contribution: f64,
}

/// Every ranking factor with its weight and contribution, for dashboards and audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingBreakdown {
    pub rating: RatingFactor,
    pub profile_completion: ProfileCompletionFactor,
    pub response_rate: ResponseRateFactor,
    pub account_age: AccountAgeFactor,
    pub composite_score: f64,
    pub composite_percent: u32,
}

impl RankingBreakdown {
    pub fn compute(profile: &DoctorProfile, inputs: &RankingInputs) -> Self {
        Self::compute_at(profile, inputs, Utc::now())
    }

    pub fn compute_at(profile: &DoctorProfile, inputs: &RankingInputs, now: DateTime<Utc>) -> Self {
        let normalized_rating = normalize_rating(inputs.rating_score);
        let completion = profile_completion(profile);
        let response = response_rate(inputs.total_reviews, inputs.total_responses);
        let age_bonus = account_age_bonus_at(inputs.account_created_at, now);

        let composite = composite_score(inputs.rating_score, completion, response, age_bonus);

        Self {
            rating: RatingFactor {
                raw: inputs.rating_score.unwrap_or(0.0),
                score: normalized_rating,
                weight: WEIGHT_RATING,
                contribution: normalized_rating * WEIGHT_RATING,
            },
            profile_completion: ProfileCompletionFactor {
                score: completion,
                percent: percent(completion),
                weight: WEIGHT_PROFILE,
                contribution: completion * WEIGHT_PROFILE,
            },
            response_rate: ResponseRateFactor {
                score: response,
                percent: percent(response),
                reviews: inputs.total_reviews,
                responses: inputs.total_responses,
                weight: WEIGHT_RESPONSE,
                contribution: response * WEIGHT_RESPONSE,
            },
            account_age: AccountAgeFactor {
                score: age_bonus,
                days: account_age_days_at(inputs.account_created_at, now),
                weight: WEIGHT_AGE,
                contribution: age_bonus * WEIGHT_AGE,
            },
            composite_score: composite,
            composite_percent: percent(composite),
        }
    }

    pub fn contributions(&self) -> [(&'static str, f64); 4] {
        [
            ("rating", self.rating.contribution),
            ("profile_completion", self.profile_completion.contribution),
            ("response_rate", self.response_rate.contribution),
            ("account_age", self.account_age.contribution),
        ]
    }
}
