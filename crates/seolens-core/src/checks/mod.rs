//! Check results and the aggregation policy
//!
//! Eight independent content-quality checks each score a traffic-light
//! status plus the evidence they computed. The overall verdict escalates
//! from them: a red on a structurant check (title, H1, keyword placement)
//! is fatal on its own, a red elsewhere only degrades the verdict to
//! orange.

pub mod rules;

use serde::Serialize;

pub use rules::run_checks;

/// Traffic-light status of one check, or of the whole audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Green,
    Orange,
    Red,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Green => "green",
            Status::Orange => "orange",
            Status::Red => "red",
        }
    }
}

/// Identity of one check. The serialized tokens are the contract the
/// presentation layer keys its copy on; they never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    Title,
    MetaDescription,
    H1,
    KeywordStructure,
    Structure,
    ImagesAlt,
    Readability,
    Lexical,
}

/// The order checks appear in every audit outcome.
pub const CHECK_ORDER: [CheckId; 8] = [
    CheckId::Title,
    CheckId::MetaDescription,
    CheckId::H1,
    CheckId::KeywordStructure,
    CheckId::Structure,
    CheckId::ImagesAlt,
    CheckId::Readability,
    CheckId::Lexical,
];

impl CheckId {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckId::Title => "title",
            CheckId::MetaDescription => "meta_description",
            CheckId::H1 => "h1",
            CheckId::KeywordStructure => "keyword_structure",
            CheckId::Structure => "structure",
            CheckId::ImagesAlt => "images_alt",
            CheckId::Readability => "readability",
            CheckId::Lexical => "lexical",
        }
    }

    /// Structurant checks force the overall verdict to red when they fail.
    pub fn is_structurant(self) -> bool {
        matches!(
            self,
            CheckId::Title | CheckId::H1 | CheckId::KeywordStructure
        )
    }
}

/// Evidence computed by one check, keyed by the check it belongs to so each
/// consumer sees a statically known shape instead of an open bag of fields.
/// Populated whatever the status turned out to be.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckData {
    Title {
        length: usize,
    },
    MetaDescription {
        length: usize,
    },
    H1 {
        count: usize,
        keyword_found: bool,
    },
    KeywordStructure {
        in_intro: bool,
        in_h2: bool,
        in_conclusion: bool,
        missing: Vec<String>,
    },
    Structure {
        h2_count: usize,
    },
    ImagesAlt {
        images: usize,
        missing_alt: usize,
    },
    Readability {
        long_paragraphs: usize,
        avg_words_per_paragraph: u32,
    },
    Lexical {
        expected: usize,
        found: Vec<String>,
    },
}

impl CheckData {
    pub fn id(&self) -> CheckId {
        match self {
            CheckData::Title { .. } => CheckId::Title,
            CheckData::MetaDescription { .. } => CheckId::MetaDescription,
            CheckData::H1 { .. } => CheckId::H1,
            CheckData::KeywordStructure { .. } => CheckId::KeywordStructure,
            CheckData::Structure { .. } => CheckId::Structure,
            CheckData::ImagesAlt { .. } => CheckId::ImagesAlt,
            CheckData::Readability { .. } => CheckId::Readability,
            CheckData::Lexical { .. } => CheckId::Lexical,
        }
    }
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub id: CheckId,
    pub status: Status,
    pub data: CheckData,
}

impl CheckResult {
    /// Build a result; the id always comes from the data variant so the two
    /// cannot drift apart.
    pub fn new(status: Status, data: CheckData) -> Self {
        Self {
            id: data.id(),
            status,
            data,
        }
    }
}

/// Combine the eight check statuses into one overall verdict.
///
/// Escalation policy, evaluated in order: a structurant red is fatal; any
/// other red, or any orange, degrades the verdict to orange; otherwise the
/// page is green.
pub fn overall_status(checks: &[CheckResult]) -> Status {
    if checks
        .iter()
        .any(|c| c.id.is_structurant() && c.status == Status::Red)
    {
        return Status::Red;
    }
    if checks.iter().any(|c| c.status == Status::Red) {
        return Status::Orange;
    }
    if checks.iter().any(|c| c.status == Status::Orange) {
        return Status::Orange;
    }
    Status::Green
}
