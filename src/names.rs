//! Name-Field Splitting
//!
//! The curated sheets write species names as one field, Chinese label
//! first with an optional Latin binomial in trailing parentheses, e.g.
//! `水蚤（Daphnia sp.）`. Half-width and full-width parentheses are used
//! interchangeably, sometimes mixed within one cell.

use once_cell::sync::Lazy;
use regex::Regex;

// Prefix up to the first opening parenthesis, then a parenthesized
// remainder anchored to the end. Content must be non-empty, so a bare
// `名称（）` stays a plain label.
static CN_LATIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^（(]+)[（(]([^）)]+)[）)]$").unwrap());

/// Split a raw name field into `(chinese_label, latin_name)`.
///
/// The input is trimmed first; an empty field yields `("", None)`. When
/// the compound pattern does not match, the whole trimmed input is the
/// Chinese label.
pub fn split_cn_latin(raw: &str) -> (String, Option<String>) {
    let raw = raw.trim();
    if raw.is_empty() {
        return (String::new(), None);
    }

    match CN_LATIN_RE.captures(raw) {
        Some(caps) => {
            let cn = caps[1].trim().to_string();
            let latin = caps[2].trim();
            let latin = if latin.is_empty() {
                None
            } else {
                Some(latin.to_string())
            };
            (cn, latin)
        }
        None => (raw.to_string(), None),
    }
}
