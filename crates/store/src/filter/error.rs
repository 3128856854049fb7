//! Error types for filter interpretation and validation.

use thiserror::Error;

use super::schema::{FilterKey, FilterValue};

/// A specialized Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Broad category of a [`FilterError`].
///
/// Callers use this to choose a response: an unparseable query and a
/// self-contradictory one are distinct outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterErrorKind {
    /// Nothing in the query was recognized.
    Unparseable,
    /// Filters were recognized but contradict each other.
    ConflictingFilters,
    /// A structured parameter has an invalid value.
    InvalidParameter,
}

/// Errors that can occur while building a filter set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// No rule matched anything in the query.
    #[error("unable to parse natural language query: {reason}")]
    Unparseable {
        /// Why the query could not be interpreted.
        reason: String,
    },

    /// Two phrases assign different values to the same key.
    #[error("conflicting filters: {key} cannot be both {first} and {second}")]
    ConflictingValues {
        /// The contested key.
        key: FilterKey,
        /// The value assigned first.
        first: FilterValue,
        /// The value that disagrees with it.
        second: FilterValue,
    },

    /// The length bounds exclude every string.
    #[error("impossible length range: min_length {min_length} is greater than max_length {max_length}")]
    ImpossibleLengthRange {
        /// Lower bound.
        min_length: u32,
        /// Upper bound.
        max_length: u32,
    },

    /// A structured parameter has a value the schema does not accept.
    #[error("invalid value for {key}: {message}")]
    InvalidParameter {
        /// The offending key.
        key: FilterKey,
        /// What is wrong with the value.
        message: String,
    },
}

impl FilterError {
    /// Creates an unparseable-query error.
    pub fn unparseable(reason: impl Into<String>) -> Self {
        FilterError::Unparseable {
            reason: reason.into(),
        }
    }

    /// Creates a conflicting-values error.
    pub fn conflicting(key: FilterKey, first: FilterValue, second: FilterValue) -> Self {
        FilterError::ConflictingValues { key, first, second }
    }

    /// Creates an invalid-parameter error.
    pub fn invalid_parameter(key: FilterKey, message: impl Into<String>) -> Self {
        FilterError::InvalidParameter {
            key,
            message: message.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> FilterErrorKind {
        match self {
            FilterError::Unparseable { .. } => FilterErrorKind::Unparseable,
            FilterError::ConflictingValues { .. } | FilterError::ImpossibleLengthRange { .. } => {
                FilterErrorKind::ConflictingFilters
            }
            FilterError::InvalidParameter { .. } => FilterErrorKind::InvalidParameter,
        }
    }

    /// Returns a stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self.kind() {
            FilterErrorKind::Unparseable => "UNPARSEABLE",
            FilterErrorKind::ConflictingFilters => "CONFLICTING_FILTERS",
            FilterErrorKind::InvalidParameter => "INVALID_PARAMETER",
        }
    }
}
