//! Text normalization primitives
//!
//! Every length threshold and keyword comparison in the scoring engine goes
//! through these functions, so they are the single place where whitespace,
//! case, and diacritics are handled. All of them are total and allocate a
//! fresh string; none of them is used for display output.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Collapse whitespace runs to a single space and trim the ends.
pub fn clean_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count of Unicode characters after cleaning.
///
/// Counts scalar values rather than bytes or UTF-16 units, so accented
/// letters and emoji count as one character each and length thresholds stay
/// meaningful regardless of the page encoding.
pub fn real_char_count(s: &str) -> usize {
    clean_text(s).chars().count()
}

/// Remove diacritics: canonical decomposition, then drop combining marks.
pub fn strip_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Canonical form used for all keyword/content comparisons.
///
/// Cleans, lowercases, strips accents, then drops everything that is not a
/// Unicode letter, digit, or whitespace.
pub fn normalize_for_match(s: &str) -> String {
    let lowered = clean_text(s).to_lowercase();
    strip_accents(&lowered)
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Number of whitespace-separated words; 0 for empty or blank input.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}
