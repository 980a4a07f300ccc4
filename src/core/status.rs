//! Threshold-based status derivation for quality checks and reports
//!
//! Pure functions only: a verdict is always recomputed from its (result,
//! check) pair, never stored. Higher numeric results are worse; a result
//! exactly equal to a threshold lands on the better side of that boundary.

use crate::models::{CheckResult, QualityCheck, Report};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Outcome of comparing a check result to its thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Passed,
    Warning,
    Failed,
    /// No check definition was known for the result
    Unknown,
    /// The report carried no results at all
    #[serde(rename = "NO DATA")]
    NoData,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Passed => "PASSED",
            Verdict::Warning => "WARNING",
            Verdict::Failed => "FAILED",
            Verdict::Unknown => "UNKNOWN",
            Verdict::NoData => "NO DATA",
        };
        write!(f, "{}", label)
    }
}

/// Derive the verdict for a single check result
///
/// Strict greater-than on both boundaries: a result equal to the error
/// threshold is a WARNING, equal to the warning threshold is a PASS.
pub fn decide(result: &CheckResult, check: Option<&QualityCheck>) -> Verdict {
    let Some(check) = check else {
        return Verdict::Unknown;
    };

    if result.result > check.error_threshold {
        Verdict::Failed
    } else if result.result > check.warning_threshold {
        Verdict::Warning
    } else {
        Verdict::Passed
    }
}

/// Per-verdict tallies for one report
///
/// `total` counts every result in the report, including those whose check
/// identifier is unmapped; the named counts skip unmapped results. The
/// asymmetry mirrors the backend data contract, so the three named counts may
/// sum to less than `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
    pub total: usize,
}

/// Tally a report's results by verdict
///
/// Results whose hash is missing from `checks` contribute to `total` only.
pub fn count_by_status(report: &Report, checks: &HashMap<String, QualityCheck>) -> StatusCounts {
    let mut counts = StatusCounts {
        total: report.results.len(),
        ..StatusCounts::default()
    };

    for result in &report.results {
        match decide(result, checks.get(&result.hash)) {
            Verdict::Passed => counts.passed += 1,
            Verdict::Warning => counts.warnings += 1,
            Verdict::Failed => counts.failed += 1,
            Verdict::Unknown | Verdict::NoData => {}
        }
    }

    counts
}

/// Overall status of a report
///
/// NO_DATA for an empty result list; otherwise any FAILED dominates any number
/// of WARNINGs, which in turn dominate PASSED. Unmapped results cannot raise
/// the overall status.
pub fn report_status(report: &Report, checks: &HashMap<String, QualityCheck>) -> Verdict {
    if report.results.is_empty() {
        return Verdict::NoData;
    }

    let mut has_warning = false;
    for result in &report.results {
        match decide(result, checks.get(&result.hash)) {
            Verdict::Failed => return Verdict::Failed,
            Verdict::Warning => has_warning = true,
            _ => {}
        }
    }

    if has_warning {
        Verdict::Warning
    } else {
        Verdict::Passed
    }
}
