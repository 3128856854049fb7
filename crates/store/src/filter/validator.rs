//! Conflict validation for extracted filter matches.
//!
//! Matches are grouped by key. Identical values collapse to one entry, so
//! redundant phrasing is harmless; differing values for one key are a
//! conflict. After per-key resolution the length bounds are checked against
//! each other. Validation is all-or-nothing: any failure discards the whole
//! query.

use super::error::{FilterError, FilterResult};
use super::rules::RawMatch;
use super::schema::{FilterKey, FilterSet, FilterValue, ValidatedFilterSet};

/// Resolves `matches` into a validated filter set for `query`.
///
/// # Errors
///
/// - `FilterError::Unparseable` if `matches` is empty.
/// - `FilterError::ConflictingValues` if one key received two different values.
/// - `FilterError::ImpossibleLengthRange` if `min_length > max_length`.
pub fn validate(query: &str, matches: &[RawMatch]) -> FilterResult<ValidatedFilterSet> {
    if matches.is_empty() {
        return Err(FilterError::unparseable("unrecognized query"));
    }

    let mut filters = FilterSet::default();
    for key in FilterKey::ALL {
        if let Some(value) = resolve_key(key, matches)? {
            if !filters.set(key, value) {
                return Err(FilterError::invalid_parameter(
                    key,
                    format!("value {value} does not fit the key"),
                ));
            }
        }
    }

    check_length_range(&filters)?;

    tracing::debug!(query, filters = filters.len(), "filters validated");
    Ok(ValidatedFilterSet {
        original: query.to_string(),
        parsed_filters: filters,
    })
}

/// Checks that the length bounds admit at least one length.
pub(crate) fn check_length_range(filters: &FilterSet) -> FilterResult<()> {
    if let (Some(min_length), Some(max_length)) = (filters.min_length, filters.max_length) {
        if min_length > max_length {
            return Err(FilterError::ImpossibleLengthRange {
                min_length,
                max_length,
            });
        }
    }
    Ok(())
}

/// Returns the single value `matches` assign to `key`, if any.
fn resolve_key(key: FilterKey, matches: &[RawMatch]) -> FilterResult<Option<FilterValue>> {
    let mut resolved: Option<FilterValue> = None;
    for m in matches.iter().filter(|m| m.key == key) {
        match resolved {
            None => resolved = Some(m.value),
            Some(first) if first != m.value => {
                return Err(FilterError::conflicting(key, first, m.value));
            }
            Some(_) => {}
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::rules::RuleId;

    fn raw(key: FilterKey, value: FilterValue, rule: RuleId) -> RawMatch {
        RawMatch {
            key,
            value,
            rule,
            span: 0..1,
        }
    }

    #[test]
    fn test_single_match_copied() {
        let matches = vec![raw(
            FilterKey::MinLength,
            FilterValue::Int(11),
            RuleId::LengthComparison,
        )];
        let set = validate("q", &matches).unwrap();
        assert_eq!(set.parsed_filters.min_length, Some(11));
        assert_eq!(set.original, "q");
    }

    #[test]
    fn test_identical_values_collapse() {
        let matches = vec![
            raw(FilterKey::WordCount, FilterValue::Int(1), RuleId::SingleWord),
            raw(FilterKey::WordCount, FilterValue::Int(1), RuleId::WordCount),
        ];
        let set = validate("q", &matches).unwrap();
        assert_eq!(set.parsed_filters.word_count, Some(1));
        assert_eq!(set.parsed_filters.len(), 1);
    }

    #[test]
    fn test_differing_values_conflict() {
        let matches = vec![
            raw(FilterKey::WordCount, FilterValue::Int(1), RuleId::SingleWord),
            raw(FilterKey::WordCount, FilterValue::Int(3), RuleId::WordCount),
        ];
        let err = validate("q", &matches).unwrap_err();
        assert_eq!(
            err,
            FilterError::conflicting(FilterKey::WordCount, FilterValue::Int(1), FilterValue::Int(3))
        );
    }

    #[test]
    fn test_impossible_length_range() {
        let matches = vec![
            raw(FilterKey::MinLength, FilterValue::Int(11), RuleId::LengthComparison),
            raw(FilterKey::MaxLength, FilterValue::Int(4), RuleId::LengthComparison),
        ];
        let err = validate("q", &matches).unwrap_err();
        assert_eq!(
            err,
            FilterError::ImpossibleLengthRange {
                min_length: 11,
                max_length: 4
            }
        );
    }

    #[test]
    fn test_equal_bounds_are_allowed() {
        let matches = vec![
            raw(FilterKey::MinLength, FilterValue::Int(5), RuleId::LengthComparison),
            raw(FilterKey::MaxLength, FilterValue::Int(5), RuleId::LengthComparison),
        ];
        let set = validate("q", &matches).unwrap();
        assert_eq!(set.parsed_filters.min_length, Some(5));
        assert_eq!(set.parsed_filters.max_length, Some(5));
    }

    #[test]
    fn test_empty_matches_unparseable() {
        let err = validate("banana", &[]).unwrap_err();
        assert_eq!(err, FilterError::unparseable("unrecognized query"));
    }

    #[test]
    fn test_mismatched_value_kind_rejected() {
        let matches = vec![raw(
            FilterKey::WordCount,
            FilterValue::Char('a'),
            RuleId::WordCount,
        )];
        let err = validate("q", &matches).unwrap_err();
        assert!(matches!(err, FilterError::InvalidParameter { .. }));
    }
}
