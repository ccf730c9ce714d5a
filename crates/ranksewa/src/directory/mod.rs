//! Doctor listing import and ordering by composite ranking score.

mod parser;

use std::cmp::Ordering;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ranking::{DoctorProfile, RankingBreakdown, RankingInputs};

#[derive(Debug, thiserror::Error)]
pub enum DirectoryImportError {
    #[error("failed to read doctor listing: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid doctor listing CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One doctor from a listing export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    pub profile: DoctorProfile,
    pub inputs: RankingInputs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDoctor {
    /// 1-based position in the listing.
    pub position: usize,
    pub name: String,
    pub breakdown: RankingBreakdown,
}

pub struct DirectoryImporter;

impl DirectoryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ListingEntry>, DirectoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ListingEntry>, DirectoryImportError> {
        Ok(parser::parse_listing(reader)?)
    }
}

/// Orders doctors by composite score, highest first. Ties fall back to name.
pub fn rank_listing(entries: &[ListingEntry], now: DateTime<Utc>) -> Vec<RankedDoctor> {
    let mut scored: Vec<(&ListingEntry, RankingBreakdown)> = entries
        .iter()
        .map(|entry| {
            let breakdown = RankingBreakdown::compute_at(&entry.profile, &entry.inputs, now);
            debug!(
                doctor = %entry.name,
                composite = breakdown.composite_score,
                "scored listing entry"
            );
            (entry, breakdown)
        })
        .collect();

    scored.sort_by(|(left, left_score), (right, right_score)| {
        right_score
            .composite_score
            .partial_cmp(&left_score.composite_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| left.name.cmp(&right.name))
    });

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (entry, breakdown))| RankedDoctor {
            position: index + 1,
            name: entry.name.clone(),
            breakdown,
        })
        .collect()
}
