use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Trims, collapses whitespace runs to single spaces, and lowercases.
///
/// Every variant match operates on this normalized form.
pub fn normalize(input: &str) -> String {
    WHITESPACE.replace_all(input.trim(), " ").to_lowercase()
}
