//! List command implementation.
//!
//! Lists stored strings, narrowed by structured property filters. Flags map
//! one-to-one onto filter keys; with no flags every string is listed.

use string_store_rs::filter::StructuredQuery;
use string_store_rs::StringManager;

use super::{CommandContext, Result};
use crate::output::{format_filters, format_records_json, format_records_table};

/// Options for the list command.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Only palindromes (true) or non-palindromes (false).
    pub palindrome: Option<bool>,
    /// Minimum length, inclusive.
    pub min_length: Option<u32>,
    /// Maximum length, inclusive.
    pub max_length: Option<u32>,
    /// Exact word count.
    pub word_count: Option<u32>,
    /// Character that must occur.
    pub contains: Option<String>,
}

impl ListOptions {
    fn to_query(&self) -> StructuredQuery {
        StructuredQuery {
            is_palindrome: self.palindrome,
            min_length: self.min_length,
            max_length: self.max_length,
            word_count: self.word_count,
            contains_character: self.contains.clone(),
        }
    }

    /// Renders the flags back as a command line fragment, used as the
    /// filter set's original text.
    fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(p) = self.palindrome {
            parts.push(format!("--palindrome {}", p));
        }
        if let Some(n) = self.min_length {
            parts.push(format!("--min-length {}", n));
        }
        if let Some(n) = self.max_length {
            parts.push(format!("--max-length {}", n));
        }
        if let Some(n) = self.word_count {
            parts.push(format!("--word-count {}", n));
        }
        if let Some(ref c) = self.contains {
            parts.push(format!("--contains {}", c));
        }
        parts.join(" ")
    }
}

/// Executes the list command.
///
/// # Errors
///
/// Returns a filter error if `--contains` is not exactly one character or
/// `--min-length` exceeds `--max-length`.
pub fn execute(ctx: &CommandContext, opts: &ListOptions, manager: &StringManager) -> Result<()> {
    let filters = opts.to_query().into_filter_set(opts.describe())?;
    let records = manager.list(&filters);

    if ctx.json_output {
        println!("{}", format_records_json(&records, filters.filters())?);
    } else if !ctx.quiet {
        if ctx.verbose {
            eprintln!("Filters: {}", format_filters(filters.filters()));
        }
        print!("{}", format_records_table(&records, ctx.use_colors));
    }

    Ok(())
}
