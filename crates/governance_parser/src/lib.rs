//! Loaders for governance contracts (YAML/TOML) and raw datasets (CSV).
//!
//! This crate turns contract documents into the strongly-typed
//! [`GovernanceContract`] structure and raw CSV files into [`DataTable`]s
//! ready for auditing.
//!
//! # Example
//!
//! ```rust
//! use governance_parser::parse_yaml;
//!
//! let yaml = r#"
//! version: "1.0"
//! metadata:
//!   domain: credit_risk
//! datasets:
//!   - name: clients
//!     schema:
//!       - column: client_id
//!         nullable: false
//! "#;
//!
//! let contract = parse_yaml(yaml).expect("Failed to parse contract");
//! assert_eq!(contract.metadata.domain, "credit_risk");
//! ```

mod csv;

pub use csv::load_csv;

use governance_core::GovernanceContract;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading contracts or data files.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported contract file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// A dataset's backing data file cannot be located.
    ///
    /// Distinct from [`ParserError::IoError`] so the orchestrator can skip the
    /// dataset with a warning and continue the run.
    #[error("Data file not found: {path}")]
    DataFileMissing {
        /// Path that was requested
        path: PathBuf,
    },

    /// A CSV row could not be interpreted against the header
    #[error("Malformed CSV at {path}, line {line}: {detail}")]
    MalformedCsv {
        /// Offending file
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// What went wrong
        detail: String,
    },
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported contract file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a governance contract from a YAML string.
pub fn parse_yaml(content: &str) -> Result<GovernanceContract> {
    let contract: GovernanceContract = serde_yaml_ng::from_str(content)?;
    Ok(contract)
}

/// Parse a governance contract from a TOML string.
pub fn parse_toml(content: &str) -> Result<GovernanceContract> {
    let contract: GovernanceContract =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(contract)
}

/// Detect the contract format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → [`ContractFormat::Yaml`]
/// * `.toml` → [`ContractFormat::Toml`]
pub fn detect_format(path: &Path) -> Result<ContractFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ContractFormat::Yaml),
        "toml" => Ok(ContractFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a governance contract from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use governance_parser::parse_file;
/// use std::path::Path;
///
/// let contract = parse_file(Path::new("config/contracts/credit_risk_v1.yaml")).unwrap();
/// println!("Loaded contract for domain: {}", contract.metadata.domain);
/// ```
pub fn parse_file(path: &Path) -> Result<GovernanceContract> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        ContractFormat::Yaml => parse_yaml(&content),
        ContractFormat::Toml => parse_toml(&content),
    }
}
