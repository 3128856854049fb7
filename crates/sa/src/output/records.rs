//! String record output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use string_analyzer_rs::prelude::StringRecord;
use string_store_rs::filter::{FilterSet, FilterValue, Token, ValidatedFilterSet};

use crate::commands::delete::DeleteResult;
use crate::commands::query::Explanation;

use super::helpers::{format_bool, format_datetime, format_frequencies, truncate_id, truncate_str};

/// JSON output structure for the list command.
#[derive(Serialize)]
pub struct ListOutput<'a> {
    pub data: &'a [&'a StringRecord],
    pub count: usize,
    pub filters_applied: Option<&'a FilterSet>,
}

/// JSON output structure for the query command.
#[derive(Serialize)]
pub struct QueryOutput<'a> {
    pub data: &'a [&'a StringRecord],
    pub count: usize,
    pub interpreted_query: &'a ValidatedFilterSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<MatchOutput<'a>>>,
}

/// JSON output structure for one recognized phrase.
#[derive(Serialize)]
pub struct MatchOutput<'a> {
    pub rule: &'static str,
    pub key: &'static str,
    pub value: FilterValue,
    /// Token index range, end exclusive.
    pub span: [usize; 2],
    pub phrase: &'a str,
}

/// JSON output structure for a failed deletion.
#[derive(Serialize)]
pub struct FailedOutput<'a> {
    pub value: &'a str,
    pub error: &'a str,
}

/// JSON output structure for the delete command.
#[derive(Serialize)]
pub struct DeleteOutput<'a> {
    pub deleted: &'a [String],
    pub failed: Vec<FailedOutput<'a>>,
}

/// Formats a single record as JSON (add and show commands).
pub fn format_record_json(record: &StringRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

/// Formats a filtered listing as JSON.
///
/// `filters_applied` is null when no filter was given.
pub fn format_records_json(
    records: &[&StringRecord],
    filters: &FilterSet,
) -> Result<String, serde_json::Error> {
    let output = ListOutput {
        data: records,
        count: records.len(),
        filters_applied: (!filters.is_empty()).then_some(filters),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats natural-language query results as JSON.
pub fn format_query_json(
    records: &[&StringRecord],
    interpreted: &ValidatedFilterSet,
    explanation: Option<&Explanation>,
) -> Result<String, serde_json::Error> {
    let matches = explanation.map(|e| {
        e.matches
            .iter()
            .zip(&e.phrases)
            .map(|(m, phrase)| MatchOutput {
                rule: m.rule.as_str(),
                key: m.key.as_str(),
                value: m.value,
                span: [m.span.start, m.span.end],
                phrase,
            })
            .collect()
    });
    let output = QueryOutput {
        data: records,
        count: records.len(),
        interpreted_query: interpreted,
        matches,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats the outcome of a delete as JSON.
pub fn format_deleted_json(result: &DeleteResult) -> Result<String, serde_json::Error> {
    let output = DeleteOutput {
        deleted: &result.deleted,
        failed: result
            .failed
            .iter()
            .map(|(value, error)| FailedOutput { value, error })
            .collect(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats records as a table.
pub fn format_records_table(records: &[&StringRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No strings found.\n".to_string();
    }

    let mut output = String::new();

    let header = format!(
        "{:<8} {:>6} {:>5} {:>6} {:<4} {}",
        "ID", "Length", "Words", "Unique", "Pal", "Value"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for record in records {
        let props = &record.properties;
        // Pad before coloring so escape codes don't skew the column.
        let palindrome = format!("{:<4}", format_bool(props.is_palindrome, false));
        let palindrome = if use_colors && props.is_palindrome {
            palindrome.green().to_string()
        } else {
            palindrome
        };
        let line = format!(
            "{:<8} {:>6} {:>5} {:>6} {} {}",
            truncate_id(&record.id),
            props.length,
            props.word_count,
            props.unique_characters,
            palindrome,
            truncate_str(&single_line(&record.value), 50)
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Formats one record with every property (show command).
pub fn format_record_details_table(record: &StringRecord, use_colors: bool) -> String {
    let props = &record.properties;
    let mut output = String::new();

    let label = if use_colors {
        "String:".bold().to_string()
    } else {
        "String:".to_string()
    };
    output.push_str(&format!("{} {}\n", label, record.value));
    output.push_str(&format!("ID: {}\n", record.id));
    output.push_str(&format!("Length: {}\n", props.length));
    output.push_str(&format!("Words: {}\n", props.word_count));
    output.push_str(&format!("Unique characters: {}\n", props.unique_characters));
    output.push_str(&format!(
        "Palindrome: {}\n",
        format_bool(props.is_palindrome, use_colors)
    ));
    output.push_str(&format!("Created: {}\n", format_datetime(&record.created_at)));

    if !props.character_frequency_map.is_empty() {
        output.push_str(&format!(
            "Frequencies: {}\n",
            format_frequencies(&props.character_frequency_map)
        ));
    }

    output
}

/// Formats a filter set as `key=value` pairs.
pub fn format_filters(filters: &FilterSet) -> String {
    if filters.is_empty() {
        return "(none)".to_string();
    }
    filters
        .entries()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats the phrases the interpreter recognized (query --explain).
pub fn format_explanation_table(explanation: &Explanation, use_colors: bool) -> String {
    let mut output = String::new();

    let header = format!(
        "{:<20} {:<20} {:<8} {:<7} {}",
        "Rule", "Filter", "Value", "Tokens", "Phrase"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for (m, phrase) in explanation.matches.iter().zip(&explanation.phrases) {
        output.push_str(&format!(
            "{:<20} {:<20} {:<8} {:<7} \"{}\"\n",
            m.rule.as_str(),
            m.key.as_str(),
            m.value.to_string(),
            format!("{}..{}", m.span.start, m.span.end),
            phrase
        ));
    }

    output
}

/// Joins the tokens covered by a match back into a phrase.
pub fn phrase_for(tokens: &[Token], span: std::ops::Range<usize>) -> String {
    tokens
        .get(span)
        .unwrap_or_default()
        .iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn single_line(value: &str) -> String {
    if value.contains(['\n', '\r', '\t']) {
        value
            .chars()
            .map(|c| {
                if c.is_whitespace() {
                    ' '
                } else {
                    c
                }
            })
            .collect()
    } else {
        value.to_string()
    }
}

/// Formats a deletion summary for humans.
pub fn format_deleted_table(result: &DeleteResult, use_colors: bool) -> String {
    let mut output = String::new();
    for value in &result.deleted {
        output.push_str(&format!("Deleted: {}\n", value));
    }
    for (value, error) in &result.failed {
        let line = format!("Failed: {} ({})", value, error);
        if use_colors {
            output.push_str(&format!("{}\n", line.red()));
        } else {
            output.push_str(&line);
            output.push('\n');
        }
    }
    output
}
