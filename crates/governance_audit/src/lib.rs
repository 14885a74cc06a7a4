//! # Governance Audit
//!
//! Tamper-evident audit trail for governance runs. Two independent concerns:
//!
//! - **Audit log**: an append-only CSV store receiving one signed entry per
//!   dataset evaluation. Each entry carries a 16-hex-character SHA-256
//!   fingerprint derived from its own fields, so every line remains
//!   independently verifiable after the fact.
//! - **Artifact digest**: a full SHA-256 digest of a finished report artifact,
//!   streamed in fixed-size chunks, serving as an external integrity proof.
//!
//! ## Example
//!
//! ```no_run
//! use governance_audit::AuditTrail;
//! use governance_core::GovernanceStatus;
//!
//! let trail = AuditTrail::new("outputs/logs");
//! let entry = trail
//!     .append_event("clients", GovernanceStatus::Passed, 95.0)
//!     .unwrap();
//! assert_eq!(entry.signature.len(), 16);
//! ```

mod digest;
mod error;
mod trail;

pub use digest::*;
pub use error::*;
pub use trail::*;
