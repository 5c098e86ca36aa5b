//! Text canonicalization shared by every matching path

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a string for comparison.
///
/// Lowercases, expands ligatures, strips diacritics, drops everything outside
/// `[a-z0-9]` and whitespace, collapses whitespace runs and trims.
/// `normalize(normalize(x)) == normalize(x)` for every input.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();

    // NFD leaves ligatures intact, so expand them first
    let mut expanded = String::with_capacity(lower.len());
    for c in lower.chars() {
        match c {
            'œ' => expanded.push_str("oe"),
            'æ' => expanded.push_str("ae"),
            'ß' => expanded.push_str("ss"),
            _ => expanded.push(c),
        }
    }

    let stripped: String = expanded
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize an optional label; `None` yields an empty string
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}
