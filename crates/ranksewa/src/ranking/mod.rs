//! Composite doctor ranking.
//!
//! The score blends the normalized rating (50%), profile completion (25%), review
//! response rate (15%) and an account age bonus capped at two years (10%).

mod composite;
mod factors;
mod profile;

pub use composite::{
    composite_score, normalize_rating, AccountAgeFactor, ProfileCompletionFactor,
    RankingBreakdown, RankingInputs, RatingFactor, ResponseRateFactor, MAX_RATING, WEIGHT_AGE,
    WEIGHT_PROFILE, WEIGHT_RATING, WEIGHT_RESPONSE,
};
pub use factors::{
    account_age_bonus, account_age_bonus_at, account_age_days_at, response_rate,
    MAX_ACCOUNT_AGE_DAYS,
};
pub use profile::{
    profile_completion, profile_completion_details, DoctorProfile, FieldCompletion,
    ProfileCompletionDetails, ProfileField, PROFILE_FIELDS,
};
