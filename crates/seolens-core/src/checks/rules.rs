//! The eight check rules
//!
//! Each rule is a pure function over the feature record and the raw keyword.
//! Rules never fail: degenerate input (empty title, empty keyword, no
//! headings, no paragraphs, no images) lands on a defined red branch
//! instead of an error path.

use crate::checks::{CheckData, CheckResult, Status};
use crate::config::ScoringConfig;
use crate::features::FeatureRecord;
use crate::matcher::{all_tokens_present, tokenize};
use crate::text::{normalize_for_match, real_char_count};

/// Generic editorial vocabulary expected to co-occur with any keyword,
/// already in normalized (lowercase, accent-stripped) form.
pub const LEXICAL_FIELD_BASE: &[&str] = &[
    "guide",
    "conseil",
    "astuce",
    "exemple",
    "definition",
    "avantage",
    "solution",
    "etape",
    "outil",
    "methode",
];

/// Run the eight checks in their fixed order.
pub fn run_checks(features: &FeatureRecord, keyword: &str, cfg: &ScoringConfig) -> Vec<CheckResult> {
    vec![
        check_title(features, cfg),
        check_meta_description(features, cfg),
        check_h1(features, keyword),
        check_keyword_structure(features, keyword, cfg),
        check_structure(features),
        check_images_alt(features),
        check_readability(features, cfg),
        check_lexical(features, keyword, cfg),
    ]
}

pub fn check_title(features: &FeatureRecord, cfg: &ScoringConfig) -> CheckResult {
    let length = real_char_count(&features.title);
    let status = if length == 0 {
        Status::Red
    } else if (cfg.title_green_min..=cfg.title_green_max).contains(&length) {
        Status::Green
    } else {
        Status::Orange
    };
    CheckResult::new(status, CheckData::Title { length })
}

pub fn check_meta_description(features: &FeatureRecord, cfg: &ScoringConfig) -> CheckResult {
    let length = real_char_count(&features.meta_description);
    // Any non-empty length outside the green band scores orange, whether it
    // falls in the near-miss bands or beyond them.
    let status = if length == 0 {
        Status::Red
    } else if (cfg.meta_green_min..=cfg.meta_green_max).contains(&length) {
        Status::Green
    } else {
        Status::Orange
    };
    CheckResult::new(status, CheckData::MetaDescription { length })
}

pub fn check_h1(features: &FeatureRecord, keyword: &str) -> CheckResult {
    let count = features.h1s.len();
    let phrase = normalize_for_match(keyword);
    let keyword_found = count == 1
        && !phrase.is_empty()
        && normalize_for_match(&features.h1s[0]).contains(&phrase);
    let status = if count != 1 {
        Status::Red
    } else if keyword_found {
        Status::Green
    } else {
        Status::Orange
    };
    CheckResult::new(
        status,
        CheckData::H1 {
            count,
            keyword_found,
        },
    )
}

pub fn check_keyword_structure(
    features: &FeatureRecord,
    keyword: &str,
    cfg: &ScoringConfig,
) -> CheckResult {
    let tokens = tokenize(keyword, cfg.placement_token_min_len);
    let fuzzy = cfg.fuzzy_min_token_len;

    let in_intro = all_tokens_present(&features.intro, &tokens, fuzzy);
    let in_h2 = features
        .h2s
        .iter()
        .any(|h2| all_tokens_present(h2, &tokens, fuzzy));
    let in_conclusion = all_tokens_present(&features.conclusion, &tokens, fuzzy);

    let missing: Vec<String> = [
        ("intro", in_intro),
        ("h2", in_h2),
        ("conclusion", in_conclusion),
    ]
    .into_iter()
    .filter(|(_, present)| !present)
    .map(|(location, _)| location.to_string())
    .collect();

    let status = match missing.len() {
        0 => Status::Green,
        1 => Status::Orange,
        _ => Status::Red,
    };
    CheckResult::new(
        status,
        CheckData::KeywordStructure {
            in_intro,
            in_h2,
            in_conclusion,
            missing,
        },
    )
}

pub fn check_structure(features: &FeatureRecord) -> CheckResult {
    let h2_count = features.h2s.len();
    let status = match h2_count {
        0 => Status::Red,
        1 => Status::Orange,
        _ => Status::Green,
    };
    CheckResult::new(status, CheckData::Structure { h2_count })
}

pub fn check_images_alt(features: &FeatureRecord) -> CheckResult {
    let images = features.images_count;
    let missing_alt = features.images_missing_alt_count;
    let status = if images == 0 {
        Status::Red
    } else if missing_alt == 0 {
        Status::Green
    } else {
        Status::Orange
    };
    CheckResult::new(
        status,
        CheckData::ImagesAlt {
            images,
            missing_alt,
        },
    )
}

pub fn check_readability(features: &FeatureRecord, cfg: &ScoringConfig) -> CheckResult {
    let long_paragraphs = features.long_paragraphs_count;
    let avg_words_per_paragraph = features.avg_words_per_paragraph;
    // A page with no paragraph content at all has nothing readable on it.
    let status = if avg_words_per_paragraph == 0 {
        Status::Red
    } else if long_paragraphs == 0 {
        Status::Green
    } else if long_paragraphs <= cfg.readability_orange_max {
        Status::Orange
    } else {
        Status::Red
    };
    CheckResult::new(
        status,
        CheckData::Readability {
            long_paragraphs,
            avg_words_per_paragraph,
        },
    )
}

pub fn check_lexical(features: &FeatureRecord, keyword: &str, cfg: &ScoringConfig) -> CheckResult {
    let mut expected: Vec<String> = LEXICAL_FIELD_BASE.iter().map(|t| t.to_string()).collect();
    for token in tokenize(keyword, cfg.lexical_token_min_len) {
        if !expected.contains(&token) {
            expected.push(token);
        }
    }

    let haystack = normalize_for_match(&lexical_zones(features));
    let found: Vec<String> = expected
        .iter()
        .filter(|term| haystack.contains(term.as_str()))
        .cloned()
        .collect();

    let status = if found.len() >= cfg.lexical_green_min {
        Status::Green
    } else if found.len() >= cfg.lexical_orange_min {
        Status::Orange
    } else {
        Status::Red
    };
    CheckResult::new(
        status,
        CheckData::Lexical {
            expected: expected.len(),
            found,
        },
    )
}

/// The key text zones the lexical field is searched in.
fn lexical_zones(features: &FeatureRecord) -> String {
    let mut zones = vec![
        features.title.as_str(),
        features.meta_description.as_str(),
    ];
    zones.extend(features.h1s.iter().map(String::as_str));
    zones.extend(features.h2s.iter().map(String::as_str));
    zones.push(features.intro.as_str());
    zones.push(features.conclusion.as_str());
    zones.join(" ")
}
