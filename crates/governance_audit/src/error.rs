//! Error types for audit operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while appending to or verifying the audit trail.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The artifact to digest cannot be located
    #[error("audit artifact not found: {path}")]
    ArtifactMissing {
        /// Path that was requested
        path: PathBuf,
    },

    /// Underlying storage failure
    #[error("audit log I/O error: {0}")]
    Io(#[from] std::io::Error),
}
