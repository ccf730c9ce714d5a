use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weighted fields that make up a complete doctor profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    PhotoUrl,
    Description,
    Education,
    College,
    Experience,
    Workplace,
    PhoneNumber,
    WorkingHours,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::PhotoUrl => "photo_url",
            ProfileField::Description => "description",
            ProfileField::Education => "education",
            ProfileField::College => "college",
            ProfileField::Experience => "experience",
            ProfileField::Workplace => "workplace",
            ProfileField::PhoneNumber => "phone_number",
            ProfileField::WorkingHours => "working_hours",
        }
    }
}

/// Completion checklist in display order. Weights sum to 100.
pub const PROFILE_FIELDS: [(ProfileField, u32); 8] = [
    (ProfileField::PhotoUrl, 20),
    (ProfileField::Description, 20),
    (ProfileField::Education, 15),
    (ProfileField::College, 10),
    (ProfileField::Experience, 10),
    (ProfileField::Workplace, 10),
    (ProfileField::PhoneNumber, 10),
    (ProfileField::WorkingHours, 5),
];

const _: () = {
    let mut total = 0;
    let mut index = 0;
    while index < PROFILE_FIELDS.len() {
        total += PROFILE_FIELDS[index].1;
        index += 1;
    }
    assert!(total == 100, "profile field weights must sum to 100");
};

/// Read-only view of the doctor attributes the ranking looks at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorProfile {
    pub photo_url: Option<String>,
    pub description: Option<String>,
    pub education: Option<String>,
    pub college: Option<String>,
    /// Years of practice.
    pub experience: Option<u32>,
    pub workplace: Option<String>,
    pub phone_number: Option<String>,
    pub working_hours: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl DoctorProfile {
    /// Whether `field` counts toward completion.
    ///
    /// Text counts once it is non-empty, even if it is only whitespace. Experience
    /// counts only when non-zero, so a doctor recording `0` years is treated the same
    /// as one who left the field blank.
    pub fn is_filled(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::PhotoUrl => text_filled(&self.photo_url),
            ProfileField::Description => text_filled(&self.description),
            ProfileField::Education => text_filled(&self.education),
            ProfileField::College => text_filled(&self.college),
            ProfileField::Experience => self.experience.is_some_and(|years| years != 0),
            ProfileField::Workplace => text_filled(&self.workplace),
            ProfileField::PhoneNumber => text_filled(&self.phone_number),
            ProfileField::WorkingHours => text_filled(&self.working_hours),
        }
    }
}

fn text_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|text| !text.is_empty())
}

/// Completion state for one checklist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCompletion {
    pub field: ProfileField,
    pub filled: bool,
    pub weight: u32,
}

/// Per-field breakdown used by the profile completion widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCompletionDetails {
    pub fields: Vec<FieldCompletion>,
    pub total_score: f64,
    pub total_percent: u32,
}

impl ProfileCompletionDetails {
    pub fn missing(&self) -> impl Iterator<Item = &FieldCompletion> {
        self.fields.iter().filter(|entry| !entry.filled)
    }
}

fn filled_weight(profile: &DoctorProfile) -> u32 {
    PROFILE_FIELDS
        .iter()
        .filter(|(field, _)| profile.is_filled(*field))
        .map(|(_, weight)| weight)
        .sum()
}

/// Fraction of the weighted checklist present on `profile`, in [0.0, 1.0].
pub fn profile_completion(profile: &DoctorProfile) -> f64 {
    f64::from(filled_weight(profile)) / 100.0
}

pub fn profile_completion_details(profile: &DoctorProfile) -> ProfileCompletionDetails {
    let fields = PROFILE_FIELDS
        .iter()
        .map(|(field, weight)| FieldCompletion {
            field: *field,
            filled: profile.is_filled(*field),
            weight: *weight,
        })
        .collect::<Vec<_>>();
    let total_percent = filled_weight(profile);

    ProfileCompletionDetails {
        fields,
        total_score: f64::from(total_percent) / 100.0,
        total_percent,
    }
}
