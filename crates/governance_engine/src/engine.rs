//! The data quality engine.
//!
//! The engine runs a dataset's contract checks in order, threading an explicit
//! accumulator through the evaluation: the issue sequence, the running score,
//! and the critical-violation flag all live in a per-call value, so one engine
//! instance is stateless and can be shared across datasets.

use governance_core::{
    ColumnSpec, DataTable, QualityReport, ScoringPolicy, Severity, ValidationIssue, SCHEMA_COLUMN,
};
use tracing::{debug, warn};

use crate::checks;
use crate::EngineError;

/// Evaluates datasets against their contract schemas.
///
/// Rule violations never raise; they are recorded as issues and folded into
/// the score and verdict. The only errors are caller-side precondition
/// violations (an empty schema, an uncompilable rule pattern).
#[derive(Debug, Clone, Default)]
pub struct DataQualityEngine {
    policy: ScoringPolicy,
}

impl DataQualityEngine {
    /// Creates an engine with the reference scoring policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom scoring policy.
    pub fn with_policy(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Audits one dataset against its contract schema.
    ///
    /// Checks run in contract column order. A structural mismatch (declared
    /// columns absent from the table) records a single schema issue and
    /// short-circuits every other check.
    pub fn evaluate(
        &self,
        dataset: &str,
        schema: &[ColumnSpec],
        table: &DataTable,
    ) -> Result<QualityReport, EngineError> {
        if schema.is_empty() {
            return Err(EngineError::EmptySchema {
                dataset: dataset.to_string(),
            });
        }

        debug!(dataset, rows = table.len(), "starting quality evaluation");
        let mut eval = Evaluation::new(dataset);

        let missing = checks::missing_columns(schema, table);
        if !missing.is_empty() {
            warn!(dataset, ?missing, "declared columns absent from table");
            eval.record(
                SCHEMA_COLUMN,
                "Missing Columns".to_string(),
                missing.len() as u64,
                Severity::Critical,
                &self.policy,
            );
            return Ok(eval.finish(&self.policy));
        }

        for spec in schema {
            if !spec.nullable {
                let nulls = checks::count_nulls(table, &spec.column);
                if nulls > 0 {
                    eval.record(
                        &spec.column,
                        "Non-Null Constraint".to_string(),
                        nulls,
                        Severity::High,
                        &self.policy,
                    );
                }
            }

            for rule in &spec.rules {
                let failed = checks::evaluate_rule(rule, table, &spec.column)?;
                if failed > 0 {
                    eval.record(&spec.column, rule.name(), failed, rule.severity(), &self.policy);
                }
            }
        }

        Ok(eval.finish(&self.policy))
    }
}

/// Accumulator for one dataset evaluation.
///
/// Owns the issue sequence, the running score, and the kill-switch flag for
/// exactly one `evaluate` call.
struct Evaluation {
    dataset: String,
    issues: Vec<ValidationIssue>,
    score: f64,
    has_critical_violation: bool,
}

impl Evaluation {
    fn new(dataset: &str) -> Self {
        Self {
            dataset: dataset.to_string(),
            issues: Vec::new(),
            score: 100.0,
            has_critical_violation: false,
        }
    }

    fn record(
        &mut self,
        column: &str,
        rule: String,
        failed_rows: u64,
        severity: Severity,
        policy: &ScoringPolicy,
    ) {
        warn!(
            dataset = %self.dataset,
            column,
            rule = %rule,
            failed_rows,
            severity = %severity,
            "quality issue recorded"
        );

        if severity == Severity::Critical && failed_rows > 0 {
            self.has_critical_violation = true;
        }
        self.score = policy.apply(self.score, severity, failed_rows);
        self.issues
            .push(ValidationIssue::new(&self.dataset, column, rule, failed_rows, severity));
    }

    fn finish(self, policy: &ScoringPolicy) -> QualityReport {
        let status = policy.decide(self.score, self.has_critical_violation);
        QualityReport {
            dataset: self.dataset,
            overall_score: round2(self.score),
            status,
            issues_found: self.issues.len(),
            details: self.issues,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
