mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dga")]
#[command(version, about = "Data Governance Auditor CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit every dataset in a contract and sign the results
    Audit {
        /// Path to the governance contract (YAML or TOML)
        contract: String,

        /// Directory holding the raw dataset CSV files
        #[arg(short, long, default_value = "data/01_raw")]
        data_dir: String,

        /// Directory the HTML report is written to
        #[arg(short, long, default_value = "outputs/reports")]
        report_dir: String,

        /// Directory holding the audit master log
        #[arg(short, long, default_value = "outputs/logs")]
        log_dir: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a contract's shape without touching any data
    Check {
        /// Path to the governance contract (YAML or TOML)
        contract: String,
    },

    /// Verify the audit log's entry signatures
    VerifyLog {
        /// Directory holding the audit master log
        #[arg(short, long, default_value = "outputs/logs")]
        log_dir: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::Audit {
            contract,
            data_dir,
            report_dir,
            log_dir,
            format,
        } => commands::audit::execute(&contract, &data_dir, &report_dir, &log_dir, &format),

        Commands::Check { contract } => commands::check::execute(&contract),

        Commands::VerifyLog { log_dir } => commands::verify_log::execute(&log_dir),
    }
}
