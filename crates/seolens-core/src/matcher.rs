//! Typo-tolerant keyword presence
//!
//! Exact substring matching over-penalizes legitimate copy variation, so a
//! keyword token may also match any single word of the text within one
//! character edit. The tolerance is only granted to tokens of at least the
//! configured minimum normalized length; short tokens would produce too many
//! false positives on unrelated 3-5 letter words.

use crate::text::normalize_for_match;

/// Split a keyword into normalized tokens, keeping those of at least
/// `min_len` characters.
///
/// The placement check uses `min_len = 3`; the lexical-field check uses
/// `min_len = 4`. Exact-phrase checks skip tokenization and use the whole
/// normalized keyword.
pub fn tokenize(keyword: &str, min_len: usize) -> Vec<String> {
    normalize_for_match(keyword)
        .split_whitespace()
        .filter(|t| t.chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}

/// Levenshtein distance, single-row dynamic programming.
///
/// O(len(a) * len(b)) time, O(min(len(a), len(b))) space. Operates on
/// Unicode scalar values, so accented characters count as single edits.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = if lc == sc { diagonal } else { diagonal + 1 };
            let insertion = row[j] + 1;
            let deletion = row[j + 1] + 1;
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(insertion).min(deletion);
        }
    }
    row[short.len()]
}

/// Whether `token` is present in `text`.
///
/// Both sides are normalized first. A direct substring hit always counts;
/// otherwise each word of the text is compared to the token with a tolerance
/// of one edit, granted only when the normalized token has at least
/// `fuzzy_min_len` characters. Empty text or an empty token is never a
/// match.
pub fn token_present(text: &str, token: &str, fuzzy_min_len: usize) -> bool {
    let text = normalize_for_match(text);
    let token = normalize_for_match(token);
    if text.is_empty() || token.is_empty() {
        return false;
    }
    if text.contains(&token) {
        return true;
    }

    let token_len = token.chars().count();
    if token_len < fuzzy_min_len {
        return false;
    }
    text.split_whitespace().any(|word| {
        word.chars().count().abs_diff(token_len) <= 1 && edit_distance(word, &token) <= 1
    })
}

/// Whether every token is independently present in `text`.
///
/// An empty token set is never satisfied; an empty keyword must not make
/// placement checks pass vacuously.
pub fn all_tokens_present(text: &str, tokens: &[String], fuzzy_min_len: usize) -> bool {
    !tokens.is_empty() && tokens.iter().all(|t| token_present(text, t, fuzzy_min_len))
}
