//! Table and column identifiers

use crate::config::DEFAULT_TABLE_NAME;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use url::Url;

static PLAIN_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"));

/// Words that cannot appear bare as an identifier in common SQL engines
const RESERVED_WORDS: &[&str] = &[
    "all", "and", "as", "asc", "between", "by", "case", "check", "column", "constraint",
    "create", "default", "delete", "desc", "distinct", "drop", "else", "end", "exists",
    "foreign", "from", "group", "having", "in", "index", "insert", "into", "is", "join", "key",
    "like", "limit", "not", "null", "offset", "on", "or", "order", "primary", "references",
    "select", "set", "table", "then", "to", "union", "unique", "update", "user", "using",
    "values", "when", "where", "with",
];

/// Derive a table name from the last non-empty path segment of a URL
///
/// `https://api.example.com/v2/user-profiles.json?x=1` gives `user_profiles`.
pub fn table_name_from_url(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or("");

    // Anything after the first dot is a file extension
    let stem = segment.split('.').next().unwrap_or("");
    sanitize_table_name(stem)
}

/// Turn arbitrary text into a lower-case `[a-z0-9_]` identifier
///
/// `-` and `.` become `_`, other characters outside the set are removed.
/// Falls back to [`DEFAULT_TABLE_NAME`] when nothing is left.
pub fn sanitize_table_name(raw: &str) -> String {
    let name: String = raw
        .chars()
        .map(|c| if c == '-' || c == '.' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_ascii_lowercase();

    if name.is_empty() {
        DEFAULT_TABLE_NAME.to_string()
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("t_{name}")
    } else {
        name
    }
}

/// Quote an identifier for SQL text if it needs it
///
/// Plain identifiers that are not reserved words are returned unchanged.
/// Everything else is wrapped in double quotes with embedded quotes doubled.
pub fn quote_identifier(name: &str) -> Cow<'_, str> {
    if PLAIN_IDENTIFIER.is_match(name) && !is_reserved(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("\"{}\"", name.replace('"', "\"\"")))
    }
}

fn is_reserved(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    RESERVED_WORDS.contains(&lower.as_str())
}
