//! # Governance Core
//!
//! Core data structures and types for the Data Governance Auditor.
//!
//! This crate provides the building blocks for auditing tabular datasets against
//! declarative governance contracts:
//!
//! - **Contract**: a versioned document listing the datasets under governance and
//!   the column-level rules each one must satisfy
//! - **Table**: an in-memory, column-addressable representation of loaded data
//! - **Report**: quality issues, severities, and the final governance verdict
//! - **Scoring**: the severity-weighted penalty table and decision thresholds
//!
//! ## Example
//!
//! ```rust
//! use governance_core::{ColumnRule, ColumnSpec, DatasetContract, ScoringPolicy};
//!
//! let dataset = DatasetContract {
//!     name: "clients".to_string(),
//!     schema: vec![
//!         ColumnSpec::new("client_id").nullable(false),
//!         ColumnSpec::new("email").nullable(false).rule(ColumnRule::EmailFormat),
//!         ColumnSpec::new("age").rule(ColumnRule::Range { min: 18.0, max: 100.0 }),
//!     ],
//! };
//!
//! let policy = ScoringPolicy::default();
//! assert_eq!(policy.failure_threshold, 80.0);
//! assert_eq!(dataset.schema.len(), 3);
//! ```

pub mod contract;
pub mod error;
pub mod report;
pub mod scoring;
pub mod table;

pub use contract::*;
pub use error::*;
pub use report::*;
pub use scoring::*;
pub use table::*;
