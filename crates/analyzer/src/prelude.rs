//! Prelude module for convenient imports.
//!
//! Re-exports the record model and the property extractor so consumers can
//! pull everything in with a single use statement.
//!
//! # Example
//!
//! ```
//! use string_analyzer_rs::prelude::*;
//!
//! let props = analyze("hello world");
//! assert_eq!(props.word_count, 2);
//! ```

pub use crate::models::{StringProperties, StringRecord};
pub use crate::properties::{analyze, content_hash, is_palindrome};
