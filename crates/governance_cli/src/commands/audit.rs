use anyhow::{bail, Context, Result};
use governance_audit::{digest_artifact, AuditError, AuditTrail, MISSING_ARTIFACT_SENTINEL};
use governance_core::QualityReport;
use governance_engine::DataQualityEngine;
use governance_parser::{load_csv, parse_file, ParserError};
use governance_reporter::HtmlReporter;
use serde_json::json;
use std::path::Path;
use tracing::{info, warn};

use crate::output;

pub fn execute(
    contract_path: &str,
    data_dir: &str,
    report_dir: &str,
    log_dir: &str,
    format: &str,
) -> Result<()> {
    info!("Auditing contract: {}", contract_path);

    // Contract shape errors are fatal to the whole run; no partial processing.
    let contract = parse_file(Path::new(contract_path))
        .with_context(|| format!("Failed to parse contract file: {contract_path}"))?;
    contract
        .validate()
        .with_context(|| format!("Contract shape is invalid: {contract_path}"))?;

    output::print_info(&format!(
        "Contract loaded: domain '{}' v{} ({} dataset(s))",
        contract.metadata.domain,
        contract.version,
        contract.datasets.len()
    ));

    let policy = contract.governance.clone().unwrap_or_default();
    let engine = DataQualityEngine::with_policy(policy);
    let trail = AuditTrail::new(log_dir);
    let mut reporter = HtmlReporter::new(report_dir);

    let mut results: Vec<QualityReport> = Vec::new();
    let mut skipped = 0usize;
    let mut pipeline_clear = true;

    for dataset in &contract.datasets {
        let data_path = Path::new(data_dir).join(format!("{}.csv", dataset.name));

        let table = match load_csv(&data_path) {
            Ok(table) => table,
            Err(ParserError::DataFileMissing { path }) => {
                // Recovered at the per-dataset level: warn and move on.
                warn!(dataset = %dataset.name, path = %path.display(), "dataset skipped");
                output::print_warning(&format!(
                    "Dataset '{}' skipped (data file not found)",
                    dataset.name
                ));
                skipped += 1;
                continue;
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to load data for dataset '{}'", dataset.name));
            }
        };

        if format != "json" {
            println!("\nAuditing dataset: {}", dataset.name);
        }

        let report = engine
            .evaluate(&dataset.name, &dataset.schema, &table)
            .with_context(|| format!("Failed to evaluate dataset '{}'", dataset.name))?;

        trail
            .append_event(&report.dataset, report.status, report.overall_score)
            .context("Failed to append to the audit log")?;

        if format != "json" {
            output::print_dataset_verdict(&report);
        }
        if report.status.is_blocking() {
            pipeline_clear = false;
        }

        reporter.add_result(report.clone());
        results.push(report);
    }

    if results.is_empty() {
        bail!("no datasets could be audited ({skipped} skipped)");
    }

    // Finalize and sign. The digest is best-effort over an already-produced
    // artifact; a missing file maps to the documented sentinel.
    let report_path = reporter.generate().context("Failed to generate report")?;
    let report_digest = match digest_artifact(&report_path) {
        Ok(digest) => digest,
        Err(AuditError::ArtifactMissing { .. }) => MISSING_ARTIFACT_SENTINEL.to_string(),
        Err(err) => return Err(err).context("Failed to digest report artifact"),
    };

    if format == "json" {
        let document = json!({
            "contract": contract.metadata.domain,
            "datasets": results,
            "skipped": skipped,
            "report_artifact": report_path.display().to_string(),
            "report_sha256": report_digest,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        println!();
        output::print_info(&format!("Report generated: {}", report_path.display()));
        output::print_info(&format!("Report signature (SHA-256): {report_digest}"));
    }

    if pipeline_clear {
        if format != "json" {
            output::print_success("Pipeline cleared: data is ready for consumption");
        }
        Ok(())
    } else {
        if format != "json" {
            output::print_error("Pipeline halted: governance constraints triggered");
        }
        std::process::exit(1);
    }
}
