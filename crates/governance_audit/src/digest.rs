//! Whole-file artifact digests.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::AuditError;

/// Sentinel the CLI reports when a digest is requested for an artifact that
/// cannot be located. Library callers get the typed
/// [`AuditError::ArtifactMissing`] instead.
pub const MISSING_ARTIFACT_SENTINEL: &str = "ERROR_FILE_NOT_FOUND";

const DIGEST_CHUNK_SIZE: usize = 4096;

/// Computes the SHA-256 digest of a finished report artifact.
///
/// The file is streamed in fixed-size chunks, so memory use is bounded
/// regardless of artifact size. Returns the 64-character lowercase hex
/// digest. A missing artifact is [`AuditError::ArtifactMissing`], distinct
/// from other I/O failures, so best-effort finalization paths can recognize
/// it without string matching.
pub fn digest_artifact(path: &Path) -> Result<String, AuditError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(AuditError::ArtifactMissing {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    let mut hasher = Sha256::new();
    let mut buffer = [0u8; DIGEST_CHUNK_SIZE];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
