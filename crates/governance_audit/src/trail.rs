//! Append-only audit log with per-entry signatures.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use governance_core::GovernanceStatus;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::AuditError;

/// File name of the audit log within its store directory.
pub const AUDIT_LOG_FILE: &str = "audit_master_log.csv";

/// Header row written once when the store is created.
pub const AUDIT_LOG_HEADER: &str = "timestamp,dataset,status,score,hash_signature";

/// One signed entry in the audit log.
#[derive(Debug, Clone)]
pub struct AuditLogEntry {
    /// ISO-8601 timestamp of the evaluation
    pub timestamp: String,
    /// Dataset that was evaluated
    pub dataset: String,
    /// Final governance status
    pub status: GovernanceStatus,
    /// Final quality score
    pub score: f64,
    /// 16-hex-character event fingerprint
    pub signature: String,
}

impl AuditLogEntry {
    fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{:.2},{}\n",
            self.timestamp, self.dataset, self.status, self.score, self.signature
        )
    }
}

/// A line that failed audit-log verification.
#[derive(Debug, Clone)]
pub struct LogAnomaly {
    /// 1-based line number within the log file
    pub line: usize,
    /// What went wrong with the line
    pub detail: String,
}

/// Append-only, signed audit log.
///
/// Entries are never rewritten or deleted; the header is written exactly once
/// when the store comes into existence. The type performs no internal
/// synchronization: concurrent appenders must serialize access themselves.
#[derive(Debug, Clone)]
pub struct AuditTrail {
    log_path: PathBuf,
}

impl AuditTrail {
    /// Creates a trail writing to `audit_master_log.csv` under `log_dir`.
    ///
    /// The directory is created lazily on first append.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_dir.into().join(AUDIT_LOG_FILE),
        }
    }

    /// Path of the backing log file.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Appends one signed entry for a dataset evaluation.
    ///
    /// The signature is `hex(sha256(timestamp ‖ dataset ‖ status))[..16]` — a
    /// compact event fingerprint, not a secret-bearing MAC.
    pub fn append_event(
        &self,
        dataset: &str,
        status: GovernanceStatus,
        score: f64,
    ) -> Result<AuditLogEntry, AuditError> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let timestamp = Utc::now().to_rfc3339();
        let signature = event_signature(&timestamp, dataset, &status.to_string());
        let entry = AuditLogEntry {
            timestamp,
            dataset: dataset.to_string(),
            status,
            score,
            signature,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        // Header and first entry go out in one write on a fresh store.
        let mut payload = String::new();
        if file.metadata()?.len() == 0 {
            payload.push_str(AUDIT_LOG_HEADER);
            payload.push('\n');
        }
        payload.push_str(&entry.to_csv_line());
        file.write_all(payload.as_bytes())?;

        debug!(dataset, signature = %entry.signature, "audit event appended");
        Ok(entry)
    }

    /// Re-derives every entry's signature from its own fields and reports the
    /// lines that no longer check out.
    ///
    /// An absent log verifies clean: nothing has been appended, so nothing can
    /// have been tampered with.
    pub fn verify(&self) -> Result<Vec<LogAnomaly>, AuditError> {
        let content = match fs::read_to_string(&self.log_path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut anomalies = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            let line_number = idx + 1;
            if line_number == 1 {
                if line != AUDIT_LOG_HEADER {
                    anomalies.push(LogAnomaly {
                        line: line_number,
                        detail: "unexpected header".to_string(),
                    });
                }
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 5 {
                anomalies.push(LogAnomaly {
                    line: line_number,
                    detail: format!("expected 5 fields, found {}", fields.len()),
                });
                continue;
            }

            let expected = event_signature(fields[0], fields[1], fields[2]);
            if expected != fields[4] {
                anomalies.push(LogAnomaly {
                    line: line_number,
                    detail: format!("signature mismatch for dataset '{}'", fields[1]),
                });
            }
        }

        Ok(anomalies)
    }
}

/// Computes the 16-hex-character fingerprint of one audit event.
fn event_signature(timestamp: &str, dataset: &str, status: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(timestamp.as_bytes());
    hasher.update(dataset.as_bytes());
    hasher.update(status.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)[..16].to_string()
}
