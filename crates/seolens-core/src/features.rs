//! Feature extraction
//!
//! Pure transform from a [`PageSnapshot`] to the fixed feature record the
//! check rules consume. Heading and paragraph entries that clean to the
//! empty string are dropped before anything is counted.

use serde::Serialize;

use crate::config::ScoringConfig;
use crate::snapshot::PageSnapshot;
use crate::text::{clean_text, real_char_count, word_count};

/// The facts one audit is scored on. Built once per audit, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub title: String,
    pub meta_description: String,
    pub h1s: Vec<String>,
    pub h2s: Vec<String>,

    /// First paragraph long enough to carry content; empty if none qualifies
    pub intro: String,

    /// Last such paragraph; equal to `intro` when only one qualifies
    pub conclusion: String,

    pub images_count: usize,
    pub images_missing_alt_count: usize,

    /// Mean word count over all non-empty paragraphs, rounded to nearest
    pub avg_words_per_paragraph: u32,

    /// Paragraphs exceeding the long-paragraph word cutoff
    pub long_paragraphs_count: usize,
}

/// Derive the feature record for one snapshot.
pub fn extract_features(snapshot: &PageSnapshot, cfg: &ScoringConfig) -> FeatureRecord {
    let clean_nonempty = |items: &[String]| -> Vec<String> {
        items
            .iter()
            .map(|s| clean_text(s))
            .filter(|s| !s.is_empty())
            .collect()
    };

    let paragraphs = clean_nonempty(&snapshot.paragraphs);

    let mut qualifying = paragraphs
        .iter()
        .filter(|p| real_char_count(p) >= cfg.paragraph_min_chars);
    let intro = qualifying.next().cloned().unwrap_or_default();
    let conclusion = qualifying.last().cloned().unwrap_or_else(|| intro.clone());

    let avg_words_per_paragraph = if paragraphs.is_empty() {
        0
    } else {
        let total: usize = paragraphs.iter().map(|p| word_count(p)).sum();
        (total as f64 / paragraphs.len() as f64).round() as u32
    };

    let long_paragraphs_count = paragraphs
        .iter()
        .filter(|p| word_count(p) > cfg.long_paragraph_words)
        .count();

    let images_missing_alt_count = snapshot
        .images
        .iter()
        .filter(|img| clean_text(&img.alt).is_empty())
        .count();

    FeatureRecord {
        title: clean_text(&snapshot.title),
        meta_description: clean_text(&snapshot.meta_description),
        h1s: clean_nonempty(&snapshot.h1s),
        h2s: clean_nonempty(&snapshot.h2s),
        intro,
        conclusion,
        images_count: snapshot.images.len(),
        images_missing_alt_count,
        avg_words_per_paragraph,
        long_paragraphs_count,
    }
}
