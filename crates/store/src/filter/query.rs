//! Structured filter parameters.
//!
//! The structured path skips the natural-language interpreter entirely: typed
//! parameters map one-to-one onto filter keys and only need the checks the
//! type system cannot express.

use serde::Deserialize;

use super::error::{FilterError, FilterResult};
use super::schema::{FilterKey, FilterSet, ValidatedFilterSet};
use super::validator::check_length_range;

/// Typed filter parameters, as received from a query string or CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StructuredQuery {
    #[serde(default)]
    pub is_palindrome: Option<bool>,

    #[serde(default)]
    pub min_length: Option<u32>,

    #[serde(default)]
    pub max_length: Option<u32>,

    #[serde(default)]
    pub word_count: Option<u32>,

    /// Kept as a string so a multi-character value can be rejected with a
    /// proper error instead of a deserialization failure.
    #[serde(default)]
    pub contains_character: Option<String>,
}

impl StructuredQuery {
    /// Converts the parameters into a validated filter set.
    ///
    /// `original` is echoed back unchanged; it is typically the raw query
    /// string the parameters were decoded from.
    ///
    /// # Errors
    ///
    /// - `FilterError::InvalidParameter` if `contains_character` is not exactly
    ///   one character.
    /// - `FilterError::ImpossibleLengthRange` if `min_length > max_length`.
    pub fn into_filter_set(self, original: impl Into<String>) -> FilterResult<ValidatedFilterSet> {
        let contains_character = match self.contains_character {
            Some(s) => Some(single_char(&s)?),
            None => None,
        };

        let filters = FilterSet {
            is_palindrome: self.is_palindrome,
            min_length: self.min_length,
            max_length: self.max_length,
            word_count: self.word_count,
            contains_character,
        };
        check_length_range(&filters)?;

        Ok(ValidatedFilterSet {
            original: original.into(),
            parsed_filters: filters,
        })
    }
}

fn single_char(s: &str) -> FilterResult<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(FilterError::invalid_parameter(
            FilterKey::ContainsCharacter,
            format!("expected exactly one character, got {:?}", s),
        )),
    }
}
