use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::warn;

use crate::ranking::{DoctorProfile, RankingInputs};

use super::ListingEntry;

pub(crate) fn parse_listing<R: Read>(reader: R) -> Result<Vec<ListingEntry>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for (index, record) in csv_reader.deserialize::<ListingRow>().enumerate() {
        let row = record?;
        if row.name.is_empty() {
            warn!(row = index + 1, "skipping listing row without a doctor name");
            continue;
        }
        entries.push(row.into_entry());
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    photo_url: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    education: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    college: Option<String>,
    #[serde(default)]
    experience: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    workplace: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    phone_number: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    working_hours: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    created_at: Option<String>,
    #[serde(default)]
    rating_score: Option<f64>,
    #[serde(default)]
    total_reviews: Option<u32>,
    #[serde(default)]
    total_responses: Option<u32>,
}

impl ListingRow {
    fn into_entry(self) -> ListingEntry {
        let created_at = self.created_at.as_deref().and_then(|raw| {
            let parsed = parse_datetime(raw);
            if parsed.is_none() {
                warn!(doctor = %self.name, value = raw, "ignoring unparseable created_at");
            }
            parsed
        });

        let profile = DoctorProfile {
            photo_url: self.photo_url,
            description: self.description,
            education: self.education,
            college: self.college,
            experience: self.experience,
            workplace: self.workplace,
            phone_number: self.phone_number,
            working_hours: self.working_hours,
            created_at,
        };
        let inputs = RankingInputs::for_profile(
            &profile,
            self.rating_score,
            self.total_reviews.unwrap_or(0),
            self.total_responses.unwrap_or(0),
        );

        ListingEntry {
            name: self.name,
            profile,
            inputs,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

pub(crate) fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_and_plain_dates() {
        let expected = Utc
            .with_ymd_and_hms(2024, 5, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp");
        assert_eq!(parse_datetime("2024-05-01"), Some(expected));
        assert_eq!(parse_datetime("2024-05-01T05:45:00+05:45"), Some(expected));
        assert_eq!(parse_datetime("01/05/2024"), None);
        assert_eq!(parse_datetime("  "), None);
    }

    #[test]
    fn blank_cells_become_absent_fields() {
        let csv = "name,photo_url,experience,rating_score,total_reviews,total_responses,created_at\n\
Dr. Hari Shrestha,,,,,,\n";

        let entries = parse_listing(csv.as_bytes()).expect("listing parses");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].profile, DoctorProfile::default());
        assert_eq!(entries[0].inputs, RankingInputs::default());
    }

    #[test]
    fn rows_without_names_are_skipped() {
        let csv = "name,rating_score\n,4.5\nDr. Gita Rai,4.0\n";

        let entries = parse_listing(csv.as_bytes()).expect("listing parses");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Dr. Gita Rai");
    }
}
