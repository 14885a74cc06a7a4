//! Scoring policy and governance decision logic.
//!
//! The policy maps severities to fixed score penalties and holds the failure
//! threshold. Deduction is presence-based: an issue costs its severity's
//! penalty once, regardless of how many rows failed.

use serde::{Deserialize, Serialize};

use crate::{GovernanceStatus, Severity};

/// Severity-weighted penalty table and decision thresholds.
///
/// The defaults are the standard strict-governance policy; a contract can
/// override individual fields through its `governance` block.
///
/// # Example
///
/// ```rust
/// use governance_core::{GovernanceStatus, ScoringPolicy, Severity};
///
/// let policy = ScoringPolicy::default();
/// let score = policy.apply(100.0, Severity::High, 5);
/// assert_eq!(score, 95.0);
/// assert_eq!(policy.decide(score, false), GovernanceStatus::Passed);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    /// Penalty for a critical violation
    pub critical_penalty: f64,

    /// Penalty for a high-severity violation
    pub high_penalty: f64,

    /// Penalty for a medium-severity violation
    pub medium_penalty: f64,

    /// Penalty for a low-severity violation
    pub low_penalty: f64,

    /// Scores below this threshold fail governance
    pub failure_threshold: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            critical_penalty: 20.0,
            high_penalty: 5.0,
            medium_penalty: 2.0,
            low_penalty: 1.0,
            failure_threshold: 80.0,
        }
    }
}

impl ScoringPolicy {
    /// Returns the penalty weight for a severity class.
    pub fn penalty(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Critical => self.critical_penalty,
            Severity::High => self.high_penalty,
            Severity::Medium => self.medium_penalty,
            Severity::Low => self.low_penalty,
        }
    }

    /// Applies the penalty for one recorded issue to a running score.
    ///
    /// The deduction is binary on the presence of failing rows; the score is
    /// clamped at a floor of 0.0.
    pub fn apply(&self, score: f64, severity: Severity, failed_rows: u64) -> f64 {
        if failed_rows == 0 {
            return score;
        }
        (score - self.penalty(severity)).max(0.0)
    }

    /// Decides the final governance status for one evaluation.
    ///
    /// A critical violation rejects the dataset unconditionally, regardless of
    /// the numeric score.
    pub fn decide(&self, score: f64, has_critical_violation: bool) -> GovernanceStatus {
        if has_critical_violation {
            GovernanceStatus::Rejected
        } else if score < self.failure_threshold {
            GovernanceStatus::Failed
        } else {
            GovernanceStatus::Passed
        }
    }
}
