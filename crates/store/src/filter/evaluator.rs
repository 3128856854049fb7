//! Filter evaluation against stored records.
//!
//! This module provides the [`FilterEvaluator`], which checks a record's
//! properties against a [`FilterSet`]. Every present entry must hold for a
//! record to match; an empty set matches everything.
//!
//! # Example
//!
//! ```
//! use string_analyzer_rs::models::StringRecord;
//! use string_store_rs::filter::{FilterEvaluator, QueryInterpreter};
//!
//! let set = QueryInterpreter::parse("palindromic strings").unwrap();
//! let evaluator = FilterEvaluator::new(set.filters());
//!
//! assert!(evaluator.matches(&StringRecord::new("level")));
//! assert!(!evaluator.matches(&StringRecord::new("levels")));
//! ```

use string_analyzer_rs::models::{StringProperties, StringRecord};

use super::schema::FilterSet;

/// Evaluates a filter set against records.
#[derive(Debug)]
pub struct FilterEvaluator<'a> {
    filters: &'a FilterSet,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates a new filter evaluator.
    pub fn new(filters: &'a FilterSet) -> Self {
        Self { filters }
    }

    /// Returns true if the record matches every present filter.
    pub fn matches(&self, record: &StringRecord) -> bool {
        self.matches_properties(&record.properties)
    }

    /// Returns true if the properties satisfy every present filter.
    pub fn matches_properties(&self, props: &StringProperties) -> bool {
        let f = self.filters;
        f.is_palindrome.map_or(true, |want| props.is_palindrome == want)
            && f.min_length.map_or(true, |min| props.length >= min as usize)
            && f.max_length.map_or(true, |max| props.length <= max as usize)
            && f.word_count.map_or(true, |n| props.word_count == n as usize)
            && f
                .contains_character
                .map_or(true, |c| props.contains_character(c))
    }

    /// Filters a slice of records, returning only those that match.
    pub fn filter_records<'b>(&self, records: &'b [StringRecord]) -> Vec<&'b StringRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
