//! Record types for analyzed strings.
//!
//! A [`StringRecord`] is immutable once created: its `id` is the SHA-256 hash
//! of its `value`, so analyzing the same input twice always yields the same id.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::properties::analyze;

/// Computed properties of a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of characters (Unicode scalar values).
    pub length: usize,

    /// Whether the string reads the same backwards, ignoring case and spaces.
    pub is_palindrome: bool,

    /// Number of distinct characters (case-sensitive).
    pub unique_characters: usize,

    /// Number of whitespace-separated words.
    pub word_count: usize,

    /// Lowercase hex SHA-256 digest of the UTF-8 bytes.
    pub sha256_hash: String,

    /// Occurrence count per character.
    pub character_frequency_map: BTreeMap<char, usize>,
}

impl StringProperties {
    /// Returns true if the character occurs at least once.
    pub fn contains_character(&self, c: char) -> bool {
        self.character_frequency_map
            .get(&c)
            .is_some_and(|count| *count > 0)
    }
}

/// A stored string together with its computed properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    /// Content hash of `value`; doubles as the primary key.
    pub id: String,

    /// The original string.
    pub value: String,

    /// Properties computed at creation time.
    pub properties: StringProperties,

    /// UTC timestamp of creation.
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Analyzes `value` and builds a record timestamped now.
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_timestamp(value, Utc::now())
    }

    /// Analyzes `value` and builds a record with an explicit creation time.
    pub fn with_timestamp(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at,
        }
    }
}
