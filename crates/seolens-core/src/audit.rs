//! Audit assembly
//!
//! One audit = one snapshot + one keyword, scored into eight check results
//! and an overall verdict. Total and deterministic: the same inputs always
//! produce the same outcome, and degenerate input produces a complete
//! all-red outcome rather than an error.

use serde::Serialize;

use crate::checks::{CheckResult, Status, overall_status, run_checks};
use crate::config::ScoringConfig;
use crate::features::extract_features;
use crate::snapshot::PageSnapshot;

/// Result of auditing one page against one keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditOutcome {
    /// The keyword the page was audited against, echoed back verbatim
    pub keyword: String,

    /// The eight check results, in fixed order
    pub checks: Vec<CheckResult>,

    /// Aggregated verdict
    pub overall: Status,
}

/// Audit a snapshot with the default thresholds.
pub fn run_audit(snapshot: &PageSnapshot, keyword: &str) -> AuditOutcome {
    run_audit_with(snapshot, keyword, &ScoringConfig::default())
}

/// Audit a snapshot with explicit thresholds.
pub fn run_audit_with(
    snapshot: &PageSnapshot,
    keyword: &str,
    cfg: &ScoringConfig,
) -> AuditOutcome {
    let features = extract_features(snapshot, cfg);
    let checks = run_checks(&features, keyword, cfg);
    let overall = overall_status(&checks);
    AuditOutcome {
        keyword: keyword.to_string(),
        checks,
        overall,
    }
}
