//! Governance contract types and structures.
//!
//! This module contains the core types for defining governance contracts: the
//! datasets under audit, their column specifications, and the declarative rules
//! each column must satisfy.

use serde::{Deserialize, Serialize};

use crate::{ContractError, ScoringPolicy, Severity};

/// A governance contract covering one or more datasets.
///
/// A `GovernanceContract` is the main entry point for describing what "good
/// data" means for a domain. It carries contract metadata, an optional scoring
/// policy override, and one [`DatasetContract`] per audited dataset.
///
/// # Example
///
/// ```rust
/// use governance_core::{ColumnSpec, ContractMetadata, DatasetContract, GovernanceContract};
///
/// let contract = GovernanceContract {
///     version: "1.0".to_string(),
///     metadata: ContractMetadata {
///         domain: "credit_risk".to_string(),
///         owner: Some("risk-team".to_string()),
///         description: None,
///     },
///     governance: None,
///     datasets: vec![DatasetContract {
///         name: "clients".to_string(),
///         schema: vec![ColumnSpec::new("client_id").nullable(false)],
///     }],
/// };
/// assert!(contract.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernanceContract {
    /// Contract document version (e.g., "1.0")
    pub version: String,

    /// Contract metadata (domain, ownership)
    pub metadata: ContractMetadata,

    /// Optional scoring policy override; the reference policy applies when absent
    #[serde(default)]
    pub governance: Option<ScoringPolicy>,

    /// Datasets governed by this contract
    pub datasets: Vec<DatasetContract>,
}

/// Metadata identifying a governance contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractMetadata {
    /// Business domain the contract belongs to (e.g., "credit_risk")
    pub domain: String,

    /// Team or individual responsible for the contract
    #[serde(default)]
    pub owner: Option<String>,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,
}

/// Column-level expectations for a single dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetContract {
    /// Dataset name; also names the backing data file
    pub name: String,

    /// Ordered column specifications
    pub schema: Vec<ColumnSpec>,
}

/// A single column specification in a dataset schema.
///
/// Declares the column name, whether nulls are tolerated, and the domain rules
/// the column's values must satisfy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name as it appears in the data
    pub column: String,

    /// Whether the column may contain null values
    #[serde(default = "default_nullable")]
    pub nullable: bool,

    /// Declarative rules applied to the column's values
    #[serde(default)]
    pub rules: Vec<ColumnRule>,
}

fn default_nullable() -> bool {
    true
}

impl ColumnSpec {
    /// Creates a nullable column spec with no rules.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            nullable: true,
            rules: Vec::new(),
        }
    }

    /// Sets the nullability of the column.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Adds a rule to the column.
    pub fn rule(mut self, rule: ColumnRule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// A declarative quality rule attached to a column.
///
/// Rules are dispatched by tag; the severity of a violation and the rule's
/// display name are properties of the tag, so new rule kinds can be added
/// without touching the evaluation control flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ColumnRule {
    /// Values must be strings carrying an email domain marker
    EmailFormat,

    /// Numeric values must fall within the inclusive bounds
    Range {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (inclusive)
        max: f64,
    },

    /// Monetary values must be strictly positive
    PositiveAmount,

    /// String values must match the regex pattern
    Pattern {
        /// Regular expression pattern
        regex: String,
    },
}

impl ColumnRule {
    /// Severity class of a violation of this rule.
    pub fn severity(&self) -> Severity {
        match self {
            ColumnRule::EmailFormat => Severity::Medium,
            ColumnRule::Range { .. } => Severity::High,
            ColumnRule::PositiveAmount => Severity::Critical,
            ColumnRule::Pattern { .. } => Severity::Medium,
        }
    }

    /// Display name used in recorded issues and reports.
    pub fn name(&self) -> String {
        match self {
            ColumnRule::EmailFormat => "Email Format".to_string(),
            ColumnRule::Range { min, max } => format!("Range Validity ({min}-{max})"),
            ColumnRule::PositiveAmount => "Positive Amount".to_string(),
            ColumnRule::Pattern { .. } => "Pattern Match".to_string(),
        }
    }
}

impl GovernanceContract {
    /// Validates the shape of the contract itself, before any data is touched.
    ///
    /// Shape violations are fatal to the whole run: a contract with no
    /// datasets, an empty dataset schema, or duplicate column names cannot be
    /// meaningfully audited.
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.datasets.is_empty() {
            return Err(ContractError::NoDatasets);
        }

        for dataset in &self.datasets {
            if dataset.schema.is_empty() {
                return Err(ContractError::EmptySchema {
                    dataset: dataset.name.clone(),
                });
            }

            let mut seen = std::collections::HashSet::new();
            for spec in &dataset.schema {
                if !seen.insert(spec.column.as_str()) {
                    return Err(ContractError::DuplicateColumn {
                        dataset: dataset.name.clone(),
                        column: spec.column.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contract_with(datasets: Vec<DatasetContract>) -> GovernanceContract {
        GovernanceContract {
            version: "1.0".to_string(),
            metadata: ContractMetadata {
                domain: "test".to_string(),
                owner: None,
                description: None,
            },
            governance: None,
            datasets,
        }
    }

    #[test]
    fn test_rule_severities() {
        assert_eq!(ColumnRule::EmailFormat.severity(), Severity::Medium);
        assert_eq!(
            ColumnRule::Range { min: 18.0, max: 100.0 }.severity(),
            Severity::High
        );
        assert_eq!(ColumnRule::PositiveAmount.severity(), Severity::Critical);
        assert_eq!(
            ColumnRule::Pattern { regex: "^CR-".to_string() }.severity(),
            Severity::Medium
        );
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ColumnRule::EmailFormat.name(), "Email Format");
        assert_eq!(
            ColumnRule::Range { min: 18.0, max: 100.0 }.name(),
            "Range Validity (18-100)"
        );
        assert_eq!(ColumnRule::PositiveAmount.name(), "Positive Amount");
    }

    #[test]
    fn test_column_spec_builder() {
        let spec = ColumnSpec::new("age")
            .nullable(false)
            .rule(ColumnRule::Range { min: 18.0, max: 100.0 });

        assert_eq!(spec.column, "age");
        assert!(!spec.nullable);
        assert_eq!(spec.rules.len(), 1);
    }

    #[test]
    fn test_validate_ok() {
        let contract = contract_with(vec![DatasetContract {
            name: "clients".to_string(),
            schema: vec![ColumnSpec::new("id"), ColumnSpec::new("email")],
        }]);

        assert!(contract.validate().is_ok());
    }

    #[test]
    fn test_validate_no_datasets() {
        let contract = contract_with(vec![]);
        assert!(matches!(
            contract.validate(),
            Err(ContractError::NoDatasets)
        ));
    }

    #[test]
    fn test_validate_empty_schema() {
        let contract = contract_with(vec![DatasetContract {
            name: "credits".to_string(),
            schema: vec![],
        }]);

        assert!(matches!(
            contract.validate(),
            Err(ContractError::EmptySchema { .. })
        ));
    }

    #[test]
    fn test_validate_duplicate_column() {
        let contract = contract_with(vec![DatasetContract {
            name: "clients".to_string(),
            schema: vec![ColumnSpec::new("id"), ColumnSpec::new("id")],
        }]);

        match contract.validate() {
            Err(ContractError::DuplicateColumn { dataset, column }) => {
                assert_eq!(dataset, "clients");
                assert_eq!(column, "id");
            }
            other => panic!("expected DuplicateColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_rule_serde_tags() {
        let yaml = r#"
- type: email-format
- type: range
  min: 18
  max: 100
- type: positive-amount
- type: pattern
  regex: "^CR-[0-9]+$"
"#;
        let rules: Vec<ColumnRule> = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(rules.len(), 4);
        assert!(matches!(rules[0], ColumnRule::EmailFormat));
        assert!(matches!(rules[1], ColumnRule::Range { .. }));
        assert!(matches!(rules[2], ColumnRule::PositiveAmount));
        assert!(matches!(rules[3], ColumnRule::Pattern { .. }));
    }

    #[test]
    fn test_nullable_defaults_to_true() {
        let yaml = "column: client_id";
        let spec: ColumnSpec = serde_yaml_ng::from_str(yaml).unwrap();
        assert!(spec.nullable);
        assert!(spec.rules.is_empty());
    }
}
