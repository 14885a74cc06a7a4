use colored::*;
use governance_core::{GovernanceStatus, QualityReport};

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_warning(message: &str) {
    println!("{} {}", "!".yellow().bold(), message.yellow());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Prints one dataset's verdict block.
pub fn print_dataset_verdict(report: &QualityReport) {
    println!(
        "  Quality score:     {:.2}/100",
        report.overall_score
    );

    let status = match report.status {
        GovernanceStatus::Passed => report.status.to_string().green().bold(),
        GovernanceStatus::Failed => report.status.to_string().yellow().bold(),
        GovernanceStatus::Rejected => report.status.to_string().red().bold(),
    };
    println!("  Compliance status: {status}");

    match report.status {
        GovernanceStatus::Rejected => {
            println!("  {}", "BLOCKED: critical compliance violation detected".red());
        }
        GovernanceStatus::Failed => {
            println!("  {}", "WARNING: quality threshold not met".yellow());
        }
        GovernanceStatus::Passed => {}
    }

    for issue in &report.details {
        println!(
            "    - [{}] {} / {} ({} failed rows)",
            issue.severity, issue.column, issue.rule, issue.failed_rows
        );
    }
}
