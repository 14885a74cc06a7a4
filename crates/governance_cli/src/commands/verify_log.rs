use anyhow::{Context, Result};
use governance_audit::AuditTrail;
use tracing::info;

use crate::output;

pub fn execute(log_dir: &str) -> Result<()> {
    let trail = AuditTrail::new(log_dir);
    info!("Verifying audit log: {}", trail.log_path().display());

    let anomalies = trail
        .verify()
        .context("Failed to read the audit log")?;

    if anomalies.is_empty() {
        output::print_success("Audit log verified: all entry signatures check out");
        return Ok(());
    }

    for anomaly in &anomalies {
        output::print_error(&format!("line {}: {}", anomaly.line, anomaly.detail));
    }
    output::print_error(&format!(
        "Audit log verification failed: {} anomalous line(s)",
        anomalies.len()
    ));
    std::process::exit(1);
}
