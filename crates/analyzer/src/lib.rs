//! String analysis library
//!
//! Computes the properties of a raw string (length, palindrome flag, unique
//! characters, word count, SHA-256 hash, character frequencies) and wraps them
//! in the [`StringRecord`](models::StringRecord) that the store persists.
//!
//! # Quick Start
//!
//! ```
//! use string_analyzer_rs::prelude::*;
//!
//! let record = StringRecord::new("racecar");
//! assert!(record.properties.is_palindrome);
//! assert_eq!(record.id, record.properties.sha256_hash);
//! ```

pub mod models;
pub mod prelude;
pub mod properties;
