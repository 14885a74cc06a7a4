//! # Governance Engine
//!
//! Rule evaluation and governance decision engine. This crate runs a contract's
//! column-level checks against a loaded table, accumulates severity-weighted
//! penalties, and produces the final pass/fail/reject verdict:
//!
//! - Structural check (declared columns must exist; a mismatch short-circuits)
//! - Completeness check (null counting for non-nullable columns)
//! - Declarative column rules (format, range, business rules)
//! - Strict governance: any critical violation rejects the dataset outright
//!
//! ## Example
//!
//! ```rust
//! use governance_core::{ColumnRule, ColumnSpec, DataRow, DataTable, DataValue, GovernanceStatus};
//! use governance_engine::DataQualityEngine;
//!
//! let schema = vec![
//!     ColumnSpec::new("client_id").nullable(false),
//!     ColumnSpec::new("age").rule(ColumnRule::Range { min: 18.0, max: 100.0 }),
//! ];
//!
//! let mut row = DataRow::new();
//! row.insert("client_id".to_string(), DataValue::Int(1001));
//! row.insert("age".to_string(), DataValue::Int(34));
//! let table = DataTable::from_rows(vec![row]);
//!
//! let engine = DataQualityEngine::new();
//! let report = engine.evaluate("clients", &schema, &table).unwrap();
//!
//! assert_eq!(report.status, GovernanceStatus::Passed);
//! assert_eq!(report.overall_score, 100.0);
//! ```

mod checks;
mod engine;
mod error;

pub use engine::*;
pub use error::*;
