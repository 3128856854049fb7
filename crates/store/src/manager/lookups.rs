//! "Did you mean" suggestions for missing values.

use strsim::levenshtein;

use crate::Catalog;

/// Maximum Levenshtein distance to consider a value as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Formats the "not found" error message, optionally including a suggestion.
pub(crate) fn format_not_found_error(value: &str, suggestion: Option<&str>) -> String {
    let base = format!("string '{}' not found", value);
    match suggestion {
        Some(s) => format!("{}. Did you mean '{}'?", base, s),
        None => base,
    }
}

/// Finds the closest candidate to `query` by Levenshtein distance.
///
/// Comparison is case-sensitive, so a value differing only in case is still
/// offered. Exact matches and candidates past the threshold are skipped.
pub(crate) fn find_similar_value<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let (best_match, best_distance) = candidates
        .filter(|value| !value.is_empty())
        .map(|value| (value, levenshtein(query, value)))
        .min_by_key(|(_, d)| *d)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match.to_string())
    } else {
        None
    }
}

impl Catalog {
    /// Returns the stored value closest to `value`, if any is near enough to
    /// be worth suggesting.
    pub fn suggest_value(&self, value: &str) -> Option<String> {
        find_similar_value(value, self.records().iter().map(|r| r.value.as_str()))
    }
}
