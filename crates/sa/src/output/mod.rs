//! Output formatting utilities for the sa CLI.
//!
//! Every command prints either a human-readable table or pretty JSON:
//!
//! - [`records`] - record tables, details, filter summaries and query explanations
//! - [`helpers`] - truncation, booleans, timestamps and frequency maps

pub mod helpers;
mod records;

pub use records::{
    format_deleted_json, format_deleted_table, format_explanation_table, format_filters,
    format_query_json, format_record_details_table, format_record_json, format_records_json,
    format_records_table, phrase_for,
};
