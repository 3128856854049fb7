//! Filter interpretation, validation and evaluation for stored strings.
//!
//! Filters reach the evaluator along one of two paths:
//!
//! - **Natural language**: [`QueryInterpreter`] tokenizes a free-text query,
//!   runs every rule over it to collect [`RawMatch`]es, and [`validate`]
//!   resolves them into a [`ValidatedFilterSet`] or rejects the query.
//! - **Structured**: [`StructuredQuery`] maps typed parameters straight onto
//!   a [`ValidatedFilterSet`].
//!
//! Both converge on [`FilterEvaluator`].
//!
//! # Supported Phrasing
//!
//! ## Palindromes
//! - `palindrome`, `palindromes`, `palindromic` - `is_palindrome = true`
//! - `not palindromic`, `non-palindromic`, `not a palindrome`,
//!   `aren't palindromes` - `is_palindrome = false`
//!
//! ## Word Count
//! - `single word`, `one word` - `word_count = 1`
//! - `N words` (digits or `zero`..`ten`) - `word_count = N`
//!
//! Word counts are exact only. Comparisons such as `more than two words`
//! are not supported and leave the query unparseable.
//!
//! ## Length
//! - `longer than N`, `more than N` - `min_length = N + 1`
//! - `at least N` - `min_length = N`
//! - `shorter than N`, `fewer than N` - `max_length = N - 1`
//! - `at most N` - `max_length = N`
//! - `not longer than N`, `not shorter than N` and the other negated forms
//!   take the opposite bound (`not longer than 5` - `max_length = 5`)
//!
//! ## Characters
//! - `containing the letter X`, `contains X` - `contains_character = X`
//! - `the first vowel` - `contains_character = 'a'`
//!
//! There is no filter for a missing character, so `not containing X` is
//! dropped rather than read as `contains_character = X`.
//!
//! # Example
//!
//! ```
//! use string_store_rs::filter::{FilterError, FilterErrorKind, QueryInterpreter};
//!
//! let set = QueryInterpreter::parse("strings longer than 10 characters").unwrap();
//! assert_eq!(set.parsed_filters.min_length, Some(11));
//!
//! let err = QueryInterpreter::parse("single word strings with three words").unwrap_err();
//! assert_eq!(err.kind(), FilterErrorKind::ConflictingFilters);
//!
//! let err = QueryInterpreter::parse("banana").unwrap_err();
//! assert!(matches!(err, FilterError::Unparseable { .. }));
//! ```

mod error;
mod evaluator;
mod lexer;
mod query;
mod rules;
mod schema;
mod validator;

pub use error::{FilterError, FilterErrorKind, FilterResult};
pub use evaluator::FilterEvaluator;
pub use lexer::{tokenize, Token};
pub use query::StructuredQuery;
pub use rules::{QueryInterpreter, RawMatch, RuleId};
pub use schema::{FilterKey, FilterSet, FilterValue, ValidatedFilterSet, ValueKind};
pub use validator::validate;
