//! Scoring thresholds
//!
//! Every cutoff used by the extractor and the check rules lives here as a
//! named field rather than a literal at the point of use, so boundary values
//! can be probed directly from tests.

/// Thresholds for feature extraction and the eight checks.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Title length band considered ideal (inclusive, real characters)
    pub title_green_min: usize,
    pub title_green_max: usize,

    /// Meta description length band considered ideal (inclusive)
    pub meta_green_min: usize,
    pub meta_green_max: usize,

    /// Minimum real-character count for a paragraph to qualify as the
    /// intro or the conclusion
    pub paragraph_min_chars: usize,

    /// A paragraph with strictly more words than this hurts readability
    pub long_paragraph_words: usize,

    /// Long paragraphs tolerated before the readability check turns red
    pub readability_orange_max: usize,

    /// Minimum normalized token length for the one-edit fuzzy tolerance
    pub fuzzy_min_token_len: usize,

    /// Minimum token length kept when tokenizing for the placement check
    pub placement_token_min_len: usize,

    /// Minimum token length kept when tokenizing for the lexical check
    pub lexical_token_min_len: usize,

    /// Lexical terms required for green / for orange
    pub lexical_green_min: usize,
    pub lexical_orange_min: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            title_green_min: 45,
            title_green_max: 60,
            meta_green_min: 120,
            meta_green_max: 160,
            paragraph_min_chars: 40,
            long_paragraph_words: 120,
            readability_orange_max: 2,
            fuzzy_min_token_len: 6,
            placement_token_min_len: 3,
            lexical_token_min_len: 4,
            lexical_green_min: 4,
            lexical_orange_min: 2,
        }
    }
}
