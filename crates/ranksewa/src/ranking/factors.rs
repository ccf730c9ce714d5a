use chrono::{DateTime, Utc};

/// Accounts reach the full age bonus after two years.
pub const MAX_ACCOUNT_AGE_DAYS: i64 = 730;

/// Share of reviews the doctor has replied to, capped at 1.0.
///
/// More responses than reviews is a data problem upstream; it is clamped rather than
/// reported.
pub fn response_rate(total_reviews: u32, total_responses: u32) -> f64 {
    if total_reviews == 0 {
        return 0.0;
    }

    (f64::from(total_responses) / f64::from(total_reviews)).min(1.0)
}

/// Whole days between `created_at` and `now`, never negative.
pub fn account_age_days_at(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    created_at
        .map(|created| now.signed_duration_since(created).num_days().max(0))
        .unwrap_or(0)
}

pub fn account_age_bonus_at(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    if created_at.is_none() {
        return 0.0;
    }

    let days = account_age_days_at(created_at, now);
    (days as f64 / MAX_ACCOUNT_AGE_DAYS as f64).clamp(0.0, 1.0)
}

pub fn account_age_bonus(created_at: Option<DateTime<Utc>>) -> f64 {
    account_age_bonus_at(created_at, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn response_rate_is_zero_without_reviews() {
        assert_eq!(response_rate(0, 0), 0.0);
        assert_eq!(response_rate(0, 7), 0.0);
    }

    #[test]
    fn response_rate_clamps_overcounted_responses() {
        assert_eq!(response_rate(10, 15), 1.0);
    }

    #[test]
    fn response_rate_is_a_plain_fraction() {
        assert!((response_rate(8, 2) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn missing_creation_date_earns_no_bonus() {
        assert_eq!(account_age_bonus_at(None, now()), 0.0);
        assert_eq!(account_age_bonus(None), 0.0);
    }

    #[test]
    fn two_year_old_account_earns_full_bonus() {
        let created = now() - Duration::days(730);
        assert_eq!(account_age_bonus_at(Some(created), now()), 1.0);
    }

    #[test]
    fn bonus_is_capped_after_two_years() {
        let created = now() - Duration::days(1460);
        assert_eq!(account_age_bonus_at(Some(created), now()), 1.0);
        assert_eq!(account_age_days_at(Some(created), now()), 1460);
    }

    #[test]
    fn partial_days_are_floored() {
        let created = now() - Duration::days(365) - Duration::hours(23);
        assert_eq!(account_age_days_at(Some(created), now()), 365);
        assert!((account_age_bonus_at(Some(created), now()) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn future_creation_date_earns_no_bonus() {
        let created = now() + Duration::days(3);
        assert_eq!(account_age_days_at(Some(created), now()), 0);
        assert_eq!(account_age_bonus_at(Some(created), now()), 0.0);
    }

    #[test]
    fn bonus_never_decreases_over_time() {
        let created = now() - Duration::days(100);
        let mut previous = 0.0;
        for offset in 0..1000 {
            let bonus = account_age_bonus_at(Some(created), now() + Duration::days(offset));
            assert!(bonus >= previous);
            previous = bonus;
        }
    }
}
