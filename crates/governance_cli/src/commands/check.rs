use anyhow::{Context, Result};
use governance_parser::parse_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(contract_path: &str) -> Result<()> {
    info!("Checking contract: {}", contract_path);

    let contract = parse_file(Path::new(contract_path))
        .with_context(|| format!("Failed to parse contract file: {contract_path}"))?;

    contract
        .validate()
        .with_context(|| format!("Contract shape is invalid: {contract_path}"))?;

    output::print_success(&format!(
        "Contract is well-formed: domain '{}', {} dataset(s)",
        contract.metadata.domain,
        contract.datasets.len()
    ));

    for dataset in &contract.datasets {
        let rules: usize = dataset.schema.iter().map(|spec| spec.rules.len()).sum();
        output::print_info(&format!(
            "  {} — {} column(s), {} rule(s)",
            dataset.name,
            dataset.schema.len(),
            rules
        ));
    }

    Ok(())
}
