//! HTML audit report assembly.
//!
//! Aggregates per-dataset [`QualityReport`]s into a single self-contained HTML
//! document. The finished file is the artifact whose SHA-256 digest serves as
//! the run's integrity proof, so generation writes it once and never touches
//! it again.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use governance_core::{GovernanceStatus, QualityReport};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while writing the report artifact.
#[derive(Debug, Error)]
pub enum ReporterError {
    /// Report file could not be written
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Accumulates dataset results and renders them as one HTML document.
pub struct HtmlReporter {
    output_dir: PathBuf,
    results: Vec<QualityReport>,
}

impl HtmlReporter {
    /// Creates a reporter writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            results: Vec::new(),
        }
    }

    /// Adds one dataset's result to the document.
    pub fn add_result(&mut self, report: QualityReport) {
        self.results.push(report);
    }

    /// Number of results added so far.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Renders and writes the report, returning the artifact path.
    ///
    /// The file name carries a timestamp so successive runs never overwrite
    /// each other's artifacts.
    pub fn generate(&self) -> Result<PathBuf, ReporterError> {
        fs::create_dir_all(&self.output_dir)?;

        let file_name = format!(
            "governance_report_{}.html",
            Utc::now().format("%Y%m%d_%H%M%S")
        );
        let path = self.output_dir.join(file_name);

        fs::write(&path, self.render())?;
        info!(path = %path.display(), datasets = self.results.len(), "report generated");
        Ok(path)
    }

    fn render(&self) -> String {
        let mut html = String::new();
        html.push_str(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Data Governance Audit Report</title>\n<style>\n\
             body { font-family: sans-serif; margin: 2em; color: #222; }\n\
             h1 { border-bottom: 2px solid #222; padding-bottom: 0.2em; }\n\
             .dataset { border: 1px solid #ccc; border-radius: 4px; padding: 1em; margin: 1em 0; }\n\
             .badge { padding: 0.2em 0.6em; border-radius: 3px; color: #fff; font-weight: bold; }\n\
             .passed { background: #2e7d32; }\n\
             .failed { background: #ef6c00; }\n\
             .rejected { background: #c62828; }\n\
             table { border-collapse: collapse; margin-top: 0.8em; }\n\
             th, td { border: 1px solid #ccc; padding: 0.3em 0.8em; text-align: left; }\n\
             </style>\n</head>\n<body>\n<h1>Data Governance Audit Report</h1>\n",
        );

        let _ = writeln!(
            html,
            "<p>Generated: {}</p>",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );

        for report in &self.results {
            let badge_class = match report.status {
                GovernanceStatus::Passed => "passed",
                GovernanceStatus::Failed => "failed",
                GovernanceStatus::Rejected => "rejected",
            };

            let _ = writeln!(
                html,
                "<div class=\"dataset\">\n<h2>{}</h2>\n\
                 <p>Status: <span class=\"badge {}\">{}</span></p>\n\
                 <p>Quality score: {:.2}/100 &mdash; {} issue(s)</p>",
                escape(&report.dataset),
                badge_class,
                report.status,
                report.overall_score,
                report.issues_found
            );

            if !report.details.is_empty() {
                html.push_str(
                    "<table>\n<tr><th>Column</th><th>Rule</th>\
                     <th>Failed rows</th><th>Severity</th></tr>\n",
                );
                for issue in &report.details {
                    let _ = writeln!(
                        html,
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                        escape(&issue.column),
                        escape(&issue.rule),
                        issue.failed_rows,
                        issue.severity
                    );
                }
                html.push_str("</table>\n");
            }
            html.push_str("</div>\n");
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

/// Escapes text for safe HTML interpolation.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
