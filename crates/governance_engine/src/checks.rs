//! Column-level check implementations.
//!
//! Each check is a pure function of the table and a column name: it counts
//! failing rows and leaves recording, scoring, and the governance decision to
//! the engine. Rule checks are dispatched on the contract's declarative rule
//! tags, so adding a rule kind does not touch the evaluation control flow.

use governance_core::{ColumnRule, ColumnSpec, DataTable, DataValue};
use regex::Regex;

use crate::EngineError;

/// Returns the contract-declared columns absent from the table, in contract
/// order.
pub(crate) fn missing_columns(schema: &[ColumnSpec], table: &DataTable) -> Vec<String> {
    schema
        .iter()
        .filter(|spec| !table.has_column(&spec.column))
        .map(|spec| spec.column.clone())
        .collect()
}

/// Counts null cells in a column. A cell missing from a row counts as null.
pub(crate) fn count_nulls(table: &DataTable, column: &str) -> u64 {
    table.column_values(column).filter(|v| v.is_null()).count() as u64
}

/// Evaluates one declarative rule against a column, returning the number of
/// failing rows.
///
/// An uncompilable pattern is a contract defect surfaced as an error; rule
/// violations themselves are counts, never errors.
pub(crate) fn evaluate_rule(
    rule: &ColumnRule,
    table: &DataTable,
    column: &str,
) -> Result<u64, EngineError> {
    let failed = match rule {
        ColumnRule::EmailFormat => count_invalid_emails(table, column),
        ColumnRule::Range { min, max } => count_out_of_range(table, column, *min, *max),
        ColumnRule::PositiveAmount => count_non_positive(table, column),
        ColumnRule::Pattern { regex } => {
            let pattern = Regex::new(regex).map_err(|source| EngineError::InvalidPattern {
                column: column.to_string(),
                source,
            })?;
            count_pattern_mismatches(table, column, &pattern)
        }
    };
    Ok(failed)
}

/// A valid email cell is a string carrying the `@` domain marker. Anything
/// else fails, nulls included.
fn count_invalid_emails(table: &DataTable, column: &str) -> u64 {
    table
        .column_values(column)
        .filter(|value| !matches!(value.as_str(), Some(s) if s.contains('@')))
        .count() as u64
}

/// Counts numeric values outside the inclusive `[min, max]` bounds. Nulls and
/// non-numeric cells are not range failures.
fn count_out_of_range(table: &DataTable, column: &str, min: f64, max: f64) -> u64 {
    table
        .column_values(column)
        .filter_map(DataValue::as_f64)
        .filter(|v| *v < min || *v > max)
        .count() as u64
}

/// Counts numeric values that are zero or negative.
fn count_non_positive(table: &DataTable, column: &str) -> u64 {
    table
        .column_values(column)
        .filter_map(DataValue::as_f64)
        .filter(|v| *v <= 0.0)
        .count() as u64
}

/// Counts cells that are not strings or do not match the pattern, nulls
/// included.
fn count_pattern_mismatches(table: &DataTable, column: &str, pattern: &Regex) -> u64 {
    table
        .column_values(column)
        .filter(|value| !matches!(value.as_str(), Some(s) if pattern.is_match(s)))
        .count() as u64
}
