//! Property extraction for raw strings.
//!
//! All functions here are pure and allocation-light; [`analyze`] computes
//! every property in one call.

use std::collections::{BTreeMap, HashSet};

use sha2::{Digest, Sha256};

use crate::models::StringProperties;

/// Computes all properties of `value`.
///
/// # Example
///
/// ```
/// use string_analyzer_rs::properties::analyze;
///
/// let props = analyze("Never odd or even");
/// assert!(props.is_palindrome);
/// assert_eq!(props.word_count, 4);
/// ```
pub fn analyze(value: &str) -> StringProperties {
    StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: value.chars().collect::<HashSet<_>>().len(),
        word_count: value.split_whitespace().count(),
        sha256_hash: content_hash(value),
        character_frequency_map: character_frequencies(value),
    }
}

/// Returns true if `value` is a palindrome, ignoring case and space characters.
///
/// Only the space character is skipped; other punctuation is compared as-is.
pub fn is_palindrome(value: &str) -> bool {
    let cleaned: Vec<char> = value
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Returns the lowercase hex SHA-256 digest of the UTF-8 bytes of `value`.
pub fn content_hash(value: &str) -> String {
    format!("{:x}", Sha256::digest(value.as_bytes()))
}

/// Counts occurrences of each character.
fn character_frequencies(value: &str) -> BTreeMap<char, usize> {
    let mut frequencies = BTreeMap::new();
    for c in value.chars() {
        *frequencies.entry(c).or_insert(0) += 1;
    }
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert_eq!(analyze("héllo").length, 5);
        assert_eq!(analyze("").length, 0);
    }

    #[test]
    fn test_palindrome_ignores_case_and_spaces() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("RaceCar"));
        assert!(is_palindrome("nurses run"));
        assert!(is_palindrome("a"));
        assert!(!is_palindrome("hello"));
    }

    #[test]
    fn test_palindrome_keeps_punctuation() {
        assert!(!is_palindrome("a,ba"));
        assert!(is_palindrome("a,a"));
    }

    #[test]
    fn test_unique_characters_case_sensitive() {
        assert_eq!(analyze("aAbb").unique_characters, 3);
        assert_eq!(analyze("hello world").unique_characters, 8);
    }

    #[test]
    fn test_word_count_splits_on_any_whitespace() {
        assert_eq!(analyze("one").word_count, 1);
        assert_eq!(analyze("  two   words ").word_count, 2);
        assert_eq!(analyze("tab\tand\nnewline").word_count, 3);
        assert_eq!(analyze("   ").word_count, 0);
    }

    #[test]
    fn test_content_hash_known_vector() {
        assert_eq!(
            content_hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_character_frequency_map() {
        let props = analyze("hello");
        assert_eq!(props.character_frequency_map.get(&'l'), Some(&2));
        assert_eq!(props.character_frequency_map.get(&'h'), Some(&1));
        assert_eq!(props.character_frequency_map.get(&'z'), None);
        assert_eq!(props.character_frequency_map.len(), 4);
    }
}
