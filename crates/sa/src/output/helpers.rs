//! Common formatting helpers shared by the output modules.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;

/// Number of hash characters shown in tables.
pub const SHORT_ID_LEN: usize = 8;

/// Shortens a content hash for table display.
pub fn truncate_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

/// Truncates to `max_len` characters, ending in `...` when shortened.
///
/// Counts characters rather than bytes so multi-byte input is never split.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Renders a boolean as `yes`/`no`.
pub fn format_bool(value: bool, use_colors: bool) -> String {
    match (value, use_colors) {
        (true, true) => "yes".green().to_string(),
        (false, true) => "no".dimmed().to_string(),
        (true, false) => "yes".to_string(),
        (false, false) => "no".to_string(),
    }
}

/// Formats a UTC timestamp in local time.
pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Formats a character so whitespace stays visible.
pub fn format_char(c: char) -> String {
    match c {
        ' ' => "' '".to_string(),
        '\t' => "'\\t'".to_string(),
        '\n' => "'\\n'".to_string(),
        '\r' => "'\\r'".to_string(),
        c => format!("'{}'", c),
    }
}

/// Formats a frequency map as `'a':3 'b':1`, most frequent first.
///
/// Ties keep character order.
pub fn format_frequencies(map: &BTreeMap<char, usize>) -> String {
    let mut entries: Vec<(&char, &usize)> = map.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));
    entries
        .into_iter()
        .map(|(c, n)| format!("{}:{}", format_char(*c), n))
        .collect::<Vec<_>>()
        .join(" ")
}
