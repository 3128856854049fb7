//! Filter schema: the fixed set of recognized filter keys and their value types.
//!
//! Both the structured query path and the natural-language interpreter emit
//! only keys from [`FilterKey`]; there is no way to construct an unknown key.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The type of value a filter key accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `true` / `false`.
    Boolean,
    /// A non-negative integer.
    Integer,
    /// Exactly one character.
    SingleCharacter,
}

/// A recognized filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    /// Palindrome flag must equal the value.
    IsPalindrome,
    /// Length must be at least the value.
    MinLength,
    /// Length must be at most the value.
    MaxLength,
    /// Word count must equal the value.
    WordCount,
    /// The character must occur in the string.
    ContainsCharacter,
}

impl FilterKey {
    /// Every key in schema order.
    pub const ALL: [FilterKey; 5] = [
        FilterKey::IsPalindrome,
        FilterKey::MinLength,
        FilterKey::MaxLength,
        FilterKey::WordCount,
        FilterKey::ContainsCharacter,
    ];

    /// Returns the wire name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::IsPalindrome => "is_palindrome",
            FilterKey::MinLength => "min_length",
            FilterKey::MaxLength => "max_length",
            FilterKey::WordCount => "word_count",
            FilterKey::ContainsCharacter => "contains_character",
        }
    }

    /// Returns the value type the key accepts.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            FilterKey::IsPalindrome => ValueKind::Boolean,
            FilterKey::MinLength | FilterKey::MaxLength | FilterKey::WordCount => {
                ValueKind::Integer
            }
            FilterKey::ContainsCharacter => ValueKind::SingleCharacter,
        }
    }

    /// Looks a key up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed filter value.
///
/// Serializes as a bare JSON bool, number, or one-character string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Int(u32),
    Char(char),
}

impl FilterValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            FilterValue::Bool(_) => ValueKind::Boolean,
            FilterValue::Int(_) => ValueKind::Integer,
            FilterValue::Char(_) => ValueKind::SingleCharacter,
        }
    }

    /// Returns true if this value can be assigned to `key`.
    pub fn fits(&self, key: FilterKey) -> bool {
        self.kind() == key.value_kind()
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Bool(b) => write!(f, "{b}"),
            FilterValue::Int(n) => write!(f, "{n}"),
            FilterValue::Char(c) => write!(f, "'{c}'"),
        }
    }
}

/// A validated, conflict-free set of filters.
///
/// Each key holds at most one value, and `min_length <= max_length` whenever
/// both are present. Only the validator and the structured query path build
/// one; it is consumed by the evaluator and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    /// Returns the value stored for `key`, if any.
    pub fn get(&self, key: FilterKey) -> Option<FilterValue> {
        match key {
            FilterKey::IsPalindrome => self.is_palindrome.map(FilterValue::Bool),
            FilterKey::MinLength => self.min_length.map(FilterValue::Int),
            FilterKey::MaxLength => self.max_length.map(FilterValue::Int),
            FilterKey::WordCount => self.word_count.map(FilterValue::Int),
            FilterKey::ContainsCharacter => self.contains_character.map(FilterValue::Char),
        }
    }

    /// Iterates the present entries in schema order.
    pub fn entries(&self) -> impl Iterator<Item = (FilterKey, FilterValue)> + '_ {
        FilterKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
    }

    /// Returns the number of present entries.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    /// Returns true if no filter is set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `value` under `key`. Returns false if the value kind does not
    /// fit the key, in which case nothing changes.
    pub(crate) fn set(&mut self, key: FilterKey, value: FilterValue) -> bool {
        match (key, value) {
            (FilterKey::IsPalindrome, FilterValue::Bool(b)) => self.is_palindrome = Some(b),
            (FilterKey::MinLength, FilterValue::Int(n)) => self.min_length = Some(n),
            (FilterKey::MaxLength, FilterValue::Int(n)) => self.max_length = Some(n),
            (FilterKey::WordCount, FilterValue::Int(n)) => self.word_count = Some(n),
            (FilterKey::ContainsCharacter, FilterValue::Char(c)) => {
                self.contains_character = Some(c)
            }
            _ => return false,
        }
        true
    }
}

/// A filter set together with the query text it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedFilterSet {
    /// The query as received, echoed back to callers.
    pub original: String,

    /// The resolved filters.
    pub parsed_filters: FilterSet,
}

impl ValidatedFilterSet {
    /// Returns the filters.
    pub fn filters(&self) -> &FilterSet {
        &self.parsed_filters
    }

    /// Returns the original query text.
    pub fn original_query(&self) -> &str {
        &self.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_roundtrip() {
        for key in FilterKey::ALL {
            assert_eq!(FilterKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(FilterKey::from_name("length"), None);
    }

    #[test]
    fn test_value_kinds() {
        assert_eq!(FilterKey::IsPalindrome.value_kind(), ValueKind::Boolean);
        assert_eq!(FilterKey::WordCount.value_kind(), ValueKind::Integer);
        assert_eq!(
            FilterKey::ContainsCharacter.value_kind(),
            ValueKind::SingleCharacter
        );
        assert!(FilterValue::Int(3).fits(FilterKey::MinLength));
        assert!(!FilterValue::Bool(true).fits(FilterKey::MinLength));
    }

    #[test]
    fn test_set_rejects_mismatched_kind() {
        let mut set = FilterSet::default();
        assert!(!set.set(FilterKey::WordCount, FilterValue::Char('a')));
        assert!(set.is_empty());

        assert!(set.set(FilterKey::WordCount, FilterValue::Int(2)));
        assert_eq!(set.get(FilterKey::WordCount), Some(FilterValue::Int(2)));
    }

    #[test]
    fn test_entries_in_schema_order() {
        let set = FilterSet {
            contains_character: Some('z'),
            is_palindrome: Some(true),
            ..Default::default()
        };
        let keys: Vec<FilterKey> = set.entries().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![FilterKey::IsPalindrome, FilterKey::ContainsCharacter]
        );
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_filter_set_serializes_only_present_keys() {
        let set = FilterSet {
            word_count: Some(1),
            is_palindrome: Some(true),
            contains_character: Some('a'),
            ..Default::default()
        };
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "is_palindrome": true,
                "word_count": 1,
                "contains_character": "a"
            })
        );
    }

    #[test]
    fn test_filter_value_display() {
        assert_eq!(FilterValue::Int(3).to_string(), "3");
        assert_eq!(FilterValue::Bool(false).to_string(), "false");
        assert_eq!(FilterValue::Char('z').to_string(), "'z'");
    }
}
