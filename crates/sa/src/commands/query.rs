//! Query command implementation.
//!
//! Filters stored strings with a natural-language query such as
//! `"palindromic strings longer than 5 characters"`. With `--explain` the
//! recognized phrases are printed first, which also helps when a query is
//! rejected as conflicting.

use string_store_rs::filter::{tokenize, QueryInterpreter, RawMatch};
use string_store_rs::StringManager;

use super::{CommandContext, Result};
use crate::output::{
    format_explanation_table, format_filters, format_query_json, format_records_table, phrase_for,
};

/// Options for the query command.
#[derive(Debug)]
pub struct QueryOptions {
    /// The query text.
    pub text: String,
    /// Print each recognized phrase before the results.
    pub explain: bool,
}

/// Phrases the interpreter recognized in a query.
#[derive(Debug)]
pub struct Explanation {
    /// Candidate assignments in rule order.
    pub matches: Vec<RawMatch>,
    /// The words each match covers, parallel to `matches`.
    pub phrases: Vec<String>,
}

impl Explanation {
    /// Interprets `text` without validating the result.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Unparseable` if nothing is recognized.
    pub fn of(text: &str) -> Result<Self> {
        let tokens = tokenize(text);
        let matches = QueryInterpreter::interpret(text)?;
        let phrases = matches
            .iter()
            .map(|m| phrase_for(&tokens, m.span.clone()))
            .collect();
        Ok(Self { matches, phrases })
    }
}

/// Executes the query command.
///
/// # Errors
///
/// Returns a filter error when the query is unparseable or its filters
/// conflict.
pub fn execute(ctx: &CommandContext, opts: &QueryOptions, manager: &StringManager) -> Result<()> {
    let explanation = if opts.explain {
        let explanation = Explanation::of(&opts.text)?;
        if !ctx.json_output && !ctx.quiet {
            print!("{}", format_explanation_table(&explanation, ctx.use_colors));
            println!();
        }
        Some(explanation)
    } else {
        None
    };

    let result = manager.filter_natural_language(&opts.text)?;
    let filters = result.interpreted.filters();

    if ctx.json_output {
        println!(
            "{}",
            format_query_json(&result.records, &result.interpreted, explanation.as_ref())?
        );
    } else if !ctx.quiet {
        if ctx.verbose || opts.explain {
            println!("Interpreted as: {}", format_filters(filters));
        }
        print!("{}", format_records_table(&result.records, ctx.use_colors));
    }

    Ok(())
}
