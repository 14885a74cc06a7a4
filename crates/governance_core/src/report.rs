//! Quality issues, severities, and governance verdicts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column token used for dataset-level structural issues.
pub const SCHEMA_COLUMN: &str = "SCHEMA";

/// Severity class of a recorded quality issue.
///
/// Severity determines the score penalty and, for [`Severity::Critical`],
/// arms the governance kill-switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        };
        f.write_str(label)
    }
}

/// Final governance status of one dataset evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GovernanceStatus {
    /// Quality score met the threshold and no critical rule broke
    Passed,
    /// Quality score fell below the threshold
    Failed,
    /// A critical rule broke; overrides any score
    Rejected,
}

impl GovernanceStatus {
    /// Returns true for statuses that block the pipeline.
    pub fn is_blocking(&self) -> bool {
        matches!(self, GovernanceStatus::Failed | GovernanceStatus::Rejected)
    }
}

impl fmt::Display for GovernanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GovernanceStatus::Passed => "PASSED",
            GovernanceStatus::Failed => "FAILED",
            GovernanceStatus::Rejected => "REJECTED",
        };
        f.write_str(label)
    }
}

/// A single recorded quality issue.
///
/// Created once per rule evaluation that found at least one failing row or a
/// structural mismatch, and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// When the issue was recorded
    pub timestamp: DateTime<Utc>,

    /// Dataset under audit
    pub dataset: String,

    /// Affected column, or [`SCHEMA_COLUMN`] for structural issues
    pub column: String,

    /// Display name of the rule that failed
    pub rule: String,

    /// Number of failing rows (for structural issues: missing columns)
    pub failed_rows: u64,

    /// Severity class of the violation
    pub severity: Severity,
}

impl ValidationIssue {
    /// Records a new issue stamped with the current time.
    pub fn new(
        dataset: impl Into<String>,
        column: impl Into<String>,
        rule: impl Into<String>,
        failed_rows: u64,
        severity: Severity,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            dataset: dataset.into(),
            column: column.into(),
            rule: rule.into(),
            failed_rows,
            severity,
        }
    }
}

/// The outcome of auditing one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Dataset that was audited
    pub dataset: String,

    /// Final quality score in `[0, 100]`, rounded to two decimals
    pub overall_score: f64,

    /// Governance verdict
    pub status: GovernanceStatus,

    /// Number of recorded issues
    pub issues_found: usize,

    /// The recorded issues, in evaluation order
    pub details: Vec<ValidationIssue>,
}
