//! End-to-end governance scenarios exercised through the public engine API.
//!
//! These tests pin the observable contract of the engine: score arithmetic,
//! the strict critical-violation override, the structural short-circuit, and
//! the order-independence of the final verdict.

use governance_core::{
    ColumnRule, ColumnSpec, DataRow, DataTable, DataValue, GovernanceStatus, Severity,
    SCHEMA_COLUMN,
};
use governance_engine::DataQualityEngine;
use pretty_assertions::assert_eq;

fn row(cells: &[(&str, DataValue)]) -> DataRow {
    cells
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[test]
fn missing_declared_column_rejects_with_single_schema_issue() {
    // Contract requires {id, age}; the table only carries id.
    let schema = vec![
        ColumnSpec::new("id").nullable(false),
        ColumnSpec::new("age")
            .nullable(false)
            .rule(ColumnRule::Range { min: 18.0, max: 100.0 }),
    ];
    let table = DataTable::from_rows(vec![
        row(&[("id", DataValue::Int(1))]),
        row(&[("id", DataValue::Int(2))]),
    ]);

    let report = DataQualityEngine::new().evaluate("clients", &schema, &table).unwrap();

    assert_eq!(report.issues_found, 1);
    assert_eq!(report.details[0].column, SCHEMA_COLUMN);
    assert_eq!(report.details[0].rule, "Missing Columns");
    assert_eq!(report.details[0].severity, Severity::Critical);
    assert_eq!(report.overall_score, 80.0);
    assert_eq!(report.status, GovernanceStatus::Rejected);
}

#[test]
fn few_bad_rows_in_large_table_cost_one_penalty() {
    // 1000 rows, 5 of them with an out-of-range age; nothing else wrong.
    let schema = vec![
        ColumnSpec::new("id").nullable(false),
        ColumnSpec::new("age").rule(ColumnRule::Range { min: 18.0, max: 100.0 }),
    ];
    let rows: Vec<DataRow> = (0..1000)
        .map(|i| {
            let age = if i < 5 { 150 } else { 30 + (i % 40) };
            row(&[("id", DataValue::Int(i)), ("age", DataValue::Int(age))])
        })
        .collect();
    let table = DataTable::from_rows(rows);

    let report = DataQualityEngine::new().evaluate("clients", &schema, &table).unwrap();

    assert_eq!(report.issues_found, 1);
    assert_eq!(report.details[0].failed_rows, 5);
    assert_eq!(report.overall_score, 95.0);
    assert_eq!(report.status, GovernanceStatus::Passed);
}

#[test]
fn single_critical_violation_rejects_despite_passing_score() {
    // One non-positive amount: the score stays at the threshold, yet the
    // kill-switch rejects the dataset.
    let schema = vec![
        ColumnSpec::new("credit_id").nullable(false),
        ColumnSpec::new("requested_amount").rule(ColumnRule::PositiveAmount),
    ];
    let table = DataTable::from_rows(vec![row(&[
        ("credit_id", DataValue::from("CR-10000")),
        ("requested_amount", DataValue::Float(-1000.0)),
    ])]);

    let report = DataQualityEngine::new().evaluate("credits", &schema, &table).unwrap();

    assert_eq!(report.overall_score, 80.0);
    assert_eq!(report.status, GovernanceStatus::Rejected);
}

#[test]
fn column_order_never_changes_score_or_status() {
    let forward = vec![
        ColumnSpec::new("email").nullable(false).rule(ColumnRule::EmailFormat),
        ColumnSpec::new("age").rule(ColumnRule::Range { min: 18.0, max: 100.0 }),
        ColumnSpec::new("requested_amount").rule(ColumnRule::PositiveAmount),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let table = DataTable::from_rows(vec![
        row(&[
            ("email", DataValue::Null),
            ("age", DataValue::Int(150)),
            ("requested_amount", DataValue::Float(-5.0)),
        ]),
        row(&[
            ("email", DataValue::from("user@bank.com")),
            ("age", DataValue::Int(40)),
            ("requested_amount", DataValue::Float(100.0)),
        ]),
    ]);

    let engine = DataQualityEngine::new();
    let a = engine.evaluate("credits", &forward, &table).unwrap();
    let b = engine.evaluate("credits", &reversed, &table).unwrap();

    assert_eq!(a.overall_score, b.overall_score);
    assert_eq!(a.status, b.status);
    assert_eq!(a.issues_found, b.issues_found);

    // Only the recording order differs.
    let mut a_rules: Vec<&str> = a.details.iter().map(|i| i.rule.as_str()).collect();
    let mut b_rules: Vec<&str> = b.details.iter().map(|i| i.rule.as_str()).collect();
    a_rules.sort_unstable();
    b_rules.sort_unstable();
    assert_eq!(a_rules, b_rules);
}

#[test]
fn reevaluation_of_unchanged_input_is_deterministic() {
    let schema = vec![
        ColumnSpec::new("email").nullable(false).rule(ColumnRule::EmailFormat),
        ColumnSpec::new("age").rule(ColumnRule::Range { min: 18.0, max: 100.0 }),
    ];
    let table = DataTable::from_rows(vec![
        row(&[("email", DataValue::Null), ("age", DataValue::Int(12))]),
        row(&[("email", DataValue::from("a@b.com")), ("age", DataValue::Int(30))]),
    ]);

    let engine = DataQualityEngine::new();
    let first = engine.evaluate("clients", &schema, &table).unwrap();
    let second = engine.evaluate("clients", &schema, &table).unwrap();

    assert_eq!(first.overall_score, second.overall_score);
    assert_eq!(first.status, second.status);
    assert_eq!(first.issues_found, second.issues_found);
    for (a, b) in first.details.iter().zip(&second.details) {
        assert_eq!(a.column, b.column);
        assert_eq!(a.rule, b.rule);
        assert_eq!(a.failed_rows, b.failed_rows);
        assert_eq!(a.severity, b.severity);
    }
}

#[test]
fn scores_stay_within_bounds_under_heavy_violation_load() {
    // Every column broken in every row; the score must clamp at 0, never
    // dip below, and the verdict must be a rejection.
    let schema: Vec<ColumnSpec> = (0..10)
        .map(|i| {
            ColumnSpec::new(format!("amount_{i}"))
                .nullable(false)
                .rule(ColumnRule::PositiveAmount)
        })
        .collect();
    let cells: DataRow = (0..10)
        .map(|i| (format!("amount_{i}"), DataValue::Float(0.0)))
        .collect();
    let table = DataTable::from_rows(vec![cells]);

    let report = DataQualityEngine::new().evaluate("credits", &schema, &table).unwrap();

    assert!(report.overall_score >= 0.0 && report.overall_score <= 100.0);
    assert_eq!(report.overall_score, 0.0);
    assert_eq!(report.status, GovernanceStatus::Rejected);
}

#[test]
fn empty_table_passes_when_contract_columns_exist() {
    // No rows means no failing rows; the structural check still applies.
    let schema = vec![ColumnSpec::new("id").nullable(false)];
    let table = DataTable::new(vec!["id".to_string()]);

    let report = DataQualityEngine::new().evaluate("clients", &schema, &table).unwrap();

    assert_eq!(report.overall_score, 100.0);
    assert_eq!(report.status, GovernanceStatus::Passed);
}
