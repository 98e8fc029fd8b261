//! # seolens-core
//!
//! Scoring engine for auditing a single web page against an editorial SEO
//! checklist: given a structural page snapshot and a target keyword, score
//! eight independent content-quality checks into a traffic-light status and
//! aggregate them into one overall verdict.
//!
//! This library provides:
//! - Text normalization and typo-tolerant keyword matching
//! - Feature extraction from a plain structural page snapshot
//! - The eight check rules and the status aggregation policy
//! - HTML parsing into a snapshot
//!
//! ## Features
//!
//! - `default`: parsing and scoring only, no I/O
//! - `fetch`: HTTP retrieval of pages (pulls in reqwest and tokio)
//!
//! ## Example
//!
//! ```
//! use seolens_core::{parse_snapshot, run_audit};
//!
//! let html = "<html><head><title>Guide</title></head><body></body></html>";
//! let snapshot = parse_snapshot(html);
//! let outcome = run_audit(&snapshot, "coaching seo");
//! assert_eq!(outcome.checks.len(), 8);
//! ```

pub mod audit;
pub mod checks;
pub mod config;
pub mod features;
pub mod matcher;
pub mod parser;
pub mod snapshot;
pub mod text;

// Re-export the audit surface
pub use audit::{AuditOutcome, run_audit, run_audit_with};
pub use checks::{CheckData, CheckId, CheckResult, Status, overall_status};
pub use config::ScoringConfig;
pub use features::{FeatureRecord, extract_features};
pub use parser::parse_snapshot;
pub use snapshot::{ImageRef, PageSnapshot};

#[cfg(feature = "fetch")]
pub use parser::fetch_html;

#[cfg(test)]
mod tests {
    use super::*;

    // 47 real characters, inside the 45-60 band
    const TITLE: &str = "Coaching SEO : le guide complet pour progresser";
    // 126 real characters, inside the 120-160 band
    const META: &str = "Decouvrez notre guide complet du coaching SEO : conseils, exemples et methodes pour ameliorer la visibilite de votre site web.";

    fn green_page_html() -> String {
        format!(
            r#"<html>
                <head>
                    <title>{TITLE}</title>
                    <meta name="description" content="{META}">
                </head>
                <body>
                    <h1>Coaching SEO pour entrepreneurs</h1>
                    <p>Le coaching seo aide les entrepreneurs a structurer leur contenu et a progresser durablement.</p>
                    <h2>Pourquoi le coaching seo</h2>
                    <p>Un paragraphe intermediaire qui developpe le sujet.</p>
                    <h2>Nos methodes et outils</h2>
                    <img src="un.png" alt="premier visuel">
                    <img src="deux.png" alt="deuxieme visuel">
                    <img src="trois.png" alt="troisieme visuel">
                    <img src="quatre.png" alt="quatrieme visuel">
                    <img src="cinq.png" alt="cinquieme visuel">
                    <p>En conclusion, un coaching seo regulier donne des resultats mesurables et durables.</p>
                </body>
            </html>"#
        )
    }

    #[test]
    fn test_full_green_scenario() {
        let snapshot = parse_snapshot(&green_page_html());
        let outcome = run_audit(&snapshot, "coaching seo");

        for check in &outcome.checks {
            assert_eq!(
                check.status,
                Status::Green,
                "{} should be green: {:?}",
                check.id.as_str(),
                check.data
            );
        }
        assert_eq!(outcome.overall, Status::Green);
    }

    #[test]
    fn test_empty_snapshot_is_all_red() {
        let outcome = run_audit(&PageSnapshot::default(), "coaching seo");

        assert_eq!(outcome.checks.len(), 8);
        for check in &outcome.checks {
            assert_eq!(
                check.status,
                Status::Red,
                "{} should be red on an empty page",
                check.id.as_str()
            );
        }
        assert_eq!(outcome.overall, Status::Red);
    }

    #[test]
    fn test_audit_is_deterministic() {
        let snapshot = parse_snapshot(&green_page_html());
        let first = run_audit(&snapshot, "coaching seo");
        let second = run_audit(&snapshot, "coaching seo");

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_missing_alt_degrades_without_being_fatal() {
        let html = green_page_html().replace(r#"alt="premier visuel""#, r#"alt="""#);
        let outcome = run_audit(&parse_snapshot(&html), "coaching seo");

        let images = outcome
            .checks
            .iter()
            .find(|c| c.id == CheckId::ImagesAlt)
            .unwrap();
        assert_eq!(images.status, Status::Orange);
        assert_eq!(outcome.overall, Status::Orange);
    }

    #[test]
    fn test_second_h1_is_fatal() {
        let html = green_page_html().replace(
            "<h1>Coaching SEO pour entrepreneurs</h1>",
            "<h1>Coaching SEO pour entrepreneurs</h1><h1>Un second titre</h1>",
        );
        let outcome = run_audit(&parse_snapshot(&html), "coaching seo");

        let h1 = outcome.checks.iter().find(|c| c.id == CheckId::H1).unwrap();
        assert_eq!(h1.status, Status::Red);
        assert_eq!(outcome.overall, Status::Red);
    }

    #[test]
    fn test_outcome_serializes_with_stable_tokens() {
        let outcome = run_audit(&PageSnapshot::default(), "coaching seo");
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&outcome).unwrap()).unwrap();

        assert_eq!(json["overall"], "red");
        assert_eq!(json["keyword"], "coaching seo");
        assert_eq!(json["checks"][0]["id"], "title");
        assert_eq!(json["checks"][0]["status"], "red");
        assert_eq!(json["checks"][0]["data"]["length"], 0);
        assert_eq!(json["checks"][3]["id"], "keyword_structure");
        assert_eq!(
            json["checks"][3]["data"]["missing"],
            serde_json::json!(["intro", "h2", "conclusion"])
        );
    }
}
