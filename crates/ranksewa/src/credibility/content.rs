use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Indicator families of a first-hand account. Each family counts once.
static SPECIFICITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // medical terms
        r"\b(diagnosis|treatment|medication|prescription|symptoms?|test|x-ray|scan|surgery)\b",
        // time references
        r"\b(minutes?|hours?|days?|weeks?|months?|waited|appointment)\b",
        // personal experience
        r"\b(i|my|me|felt|experienced|visited|went|saw|told)\b",
        // setting details
        r"\b(staff|nurse|reception|clinic|office|waiting room|consultation)\b",
        // measurements
        r"\d+\s*(minutes?|hours?|rupees?|days?)",
    ]
    .into_iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

const SPECIFICITY_THRESHOLD: usize = 3;
const DUPLICATE_MIN_CHARS: usize = 20;
const DUPLICATE_SIMILARITY: f64 = 0.8;

pub(crate) fn has_specific_content(comment: &str) -> bool {
    if comment.is_empty() {
        return false;
    }

    let lowered = comment.to_lowercase();
    SPECIFICITY_PATTERNS
        .iter()
        .filter(|pattern| pattern.is_match(&lowered))
        .count()
        >= SPECIFICITY_THRESHOLD
}

/// Lower-cased, trimmed, with whitespace runs collapsed to one space.
pub(crate) fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Jaccard similarity of the two texts' word sets.
pub(crate) fn word_similarity(left: &str, right: &str) -> f64 {
    let left: HashSet<&str> = left.split_whitespace().collect();
    let right: HashSet<&str> = right.split_whitespace().collect();
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let shared = left.intersection(&right).count();
    let union = left.union(&right).count();
    shared as f64 / union as f64
}

pub(crate) fn is_duplicate_content<'a, I>(comment: &str, others: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    if comment.trim().chars().count() < DUPLICATE_MIN_CHARS {
        return false;
    }

    let normalized = normalize_text(comment);
    others
        .into_iter()
        .any(|other| word_similarity(&normalized, &normalize_text(other)) > DUPLICATE_SIMILARITY)
}
