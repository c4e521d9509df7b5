//! Producer name extraction from free-text credit fields

use once_cell::sync::Lazy;
use regex::Regex;

/// Separators in credit text: a comma with optional surrounding
/// whitespace, or the word "and" between whitespace
static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*|\s+and\s+").expect("separator regex is valid"));

/// Split a free-text producer credit into individual trimmed names.
///
/// Splitting is textual, not grammatical: a name that itself contains the
/// word "and" between spaces gets split too. That matches the award list
/// format, which never quotes names, and is deliberately left as is.
/// Duplicate names are kept; the win aggregator deduplicates by year.
pub fn extract_producers(text: &str) -> Vec<String> {
    SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
