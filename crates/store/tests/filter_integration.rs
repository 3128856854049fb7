//! Natural-language filtering over a populated catalog.
//!
//! Each test seeds a manager with a fixed set of strings and checks which of
//! them a query selects.

use string_store_rs::filter::{FilterErrorKind, QueryInterpreter, StructuredQuery};
use string_store_rs::{CatalogStore, ManagerError, StringManager};
use tempfile::{tempdir, TempDir};

const SEED: &[&str] = &[
    "racecar",
    "level",
    "a",
    "hello world",
    "never odd or even",
    "zebra",
    "pizza puzzle",
    "Madam",
    "abcdefghijkl",
];

fn seeded_manager() -> (TempDir, StringManager) {
    let dir = tempdir().unwrap();
    let mut manager = StringManager::new(CatalogStore::with_path(dir.path().join("s.json"))).unwrap();
    for value in SEED {
        manager.create(value).unwrap();
    }
    (dir, manager)
}

fn run(manager: &StringManager, query: &str) -> Vec<String> {
    manager
        .filter_natural_language(query)
        .unwrap_or_else(|e| panic!("query {query:?} failed: {e}"))
        .records
        .into_iter()
        .map(|r| r.value.clone())
        .collect()
}

#[test]
fn test_single_word_palindromes() {
    let (_dir, manager) = seeded_manager();
    assert_eq!(
        run(&manager, "all single word palindromic strings"),
        vec!["racecar", "level", "a", "Madam"]
    );
}

#[test]
fn test_multi_word_palindrome_ignores_spaces() {
    let (_dir, manager) = seeded_manager();
    assert_eq!(
        run(&manager, "palindromes with four words"),
        vec!["never odd or even"]
    );
}

#[test]
fn test_longer_than_is_strict() {
    let (_dir, manager) = seeded_manager();
    // "hello world" has exactly 11 characters
    assert_eq!(
        run(&manager, "strings longer than 11 characters"),
        vec!["never odd or even", "pizza puzzle", "abcdefghijkl"]
    );
}

#[test]
fn test_contains_letter() {
    let (_dir, manager) = seeded_manager();
    assert_eq!(
        run(&manager, "strings containing the letter z"),
        vec!["zebra", "pizza puzzle"]
    );
}

#[test]
fn test_first_vowel_with_palindrome() {
    let (_dir, manager) = seeded_manager();
    assert_eq!(
        run(&manager, "palindromic strings that contain the first vowel"),
        vec!["racecar", "a", "Madam"]
    );
}

#[test]
fn test_negated_palindrome() {
    let (_dir, manager) = seeded_manager();
    assert_eq!(
        run(&manager, "non-palindromic single word strings"),
        vec!["zebra", "abcdefghijkl"]
    );
}

#[test]
fn test_query_matching_nothing_is_not_an_error() {
    let (_dir, manager) = seeded_manager();
    assert!(run(&manager, "strings longer than 50 characters").is_empty());
}

#[test]
fn test_conflicting_query_is_rejected() {
    let (_dir, manager) = seeded_manager();
    let err = manager
        .filter_natural_language("strings longer than 10 characters and shorter than 3 characters")
        .unwrap_err();
    match err {
        ManagerError::Filter(e) => assert_eq!(e.kind(), FilterErrorKind::ConflictingFilters),
        other => panic!("expected filter error, got {other:?}"),
    }
}

#[test]
fn test_natural_language_and_structured_paths_agree() {
    let (_dir, manager) = seeded_manager();

    let interpreted = QueryInterpreter::parse("single word palindromes at least 5 characters").unwrap();
    let structured = StructuredQuery {
        is_palindrome: Some(true),
        word_count: Some(1),
        min_length: Some(5),
        ..Default::default()
    }
    .into_filter_set("")
    .unwrap();

    assert_eq!(interpreted.parsed_filters, structured.parsed_filters);
    assert_eq!(manager.list(&interpreted), manager.list(&structured));
}
