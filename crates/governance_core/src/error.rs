//! Error types for governance contracts.

use thiserror::Error;

/// Result type for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;

/// Errors in the shape of a governance contract.
///
/// These are caller-side defects in the contract document itself, fatal to
/// the whole run; they are never folded into a quality score.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Contract declares no datasets
    #[error("contract defines no datasets")]
    NoDatasets,

    /// A dataset has no column specifications
    #[error("dataset '{dataset}' has an empty schema")]
    EmptySchema {
        /// Dataset with the empty schema
        dataset: String,
    },

    /// A column name appears more than once in a dataset schema
    #[error("duplicate column '{column}' in dataset '{dataset}'")]
    DuplicateColumn {
        /// Dataset containing the duplicate
        dataset: String,
        /// The duplicated column name
        column: String,
    },
}
