//! String normalization helpers.

use regex::Regex;
use std::sync::OnceLock;

fn disallowed_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9\s\-_]").expect("static pattern"))
}

/// Lowercase, trim, and replace each whitespace run with a single `-`.
///
/// ```
/// use nebulaai_core::normalize_string;
///
/// assert_eq!(normalize_string("  Nebula  AI Labs "), "nebula-ai-labs");
/// ```
pub fn normalize_string(s: &str) -> String {
    s.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Uppercase the first character and leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip everything except ASCII letters, digits, whitespace, `-` and `_`,
/// then trim.
pub fn sanitize_input(input: &str) -> String {
    disallowed_chars().replace_all(input, "").trim().to_string()
}
