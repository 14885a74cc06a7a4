//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur while evaluating a dataset.
///
/// Quality violations are not errors; they are recorded as issues. These
/// variants cover preconditions the caller must uphold.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The contract supplied no columns to audit
    #[error("dataset '{dataset}' has no contract columns to audit")]
    EmptySchema {
        /// Dataset the empty schema was supplied for
        dataset: String,
    },

    /// A pattern rule carries an uncompilable regex
    #[error("invalid pattern for column '{column}': {source}")]
    InvalidPattern {
        /// Column the pattern rule is attached to
        column: String,
        /// Regex compilation failure
        #[source]
        source: regex::Error,
    },
}
