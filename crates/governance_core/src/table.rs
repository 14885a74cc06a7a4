//! In-memory table representation for audits.
//!
//! This module provides the row/column structure that loaded datasets are
//! audited through. Cells are null-detectable and addressable by column name.

use std::collections::{BTreeSet, HashMap};

/// A cell value in a data table.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// Null/missing value
    Null,
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
}

static NULL_VALUE: DataValue = DataValue::Null;

impl DataValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::String(_) => "string",
            DataValue::Int(_) => "int64",
            DataValue::Float(_) => "float64",
            DataValue::Bool(_) => "boolean",
        }
    }

    /// Attempts to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as a float. Integers coerce.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Float(f) => Some(*f),
            DataValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Float(f)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

/// A single row of data.
pub type DataRow = HashMap<String, DataValue>;

/// A table of named columns and data rows.
///
/// The column list is explicit so structural checks can compare the table's
/// actual columns against a contract without scanning rows. Column order
/// carries no meaning.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<DataRow>,
}

impl DataTable {
    /// Creates an empty table with no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an empty table with the given columns.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates a table from rows, deriving the column list from the union of
    /// row keys (sorted, for determinism).
    pub fn from_rows(rows: Vec<DataRow>) -> Self {
        let columns: BTreeSet<String> = rows
            .iter()
            .flat_map(|row| row.keys().cloned())
            .collect();
        Self {
            columns: columns.into_iter().collect(),
            rows,
        }
    }

    /// Returns the table's column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if the table has a column with the given name.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Appends a row. Keys not in the column list are added to it.
    pub fn add_row(&mut self, row: DataRow) {
        for key in row.keys() {
            if !self.has_column(key) {
                self.columns.push(key.clone());
            }
        }
        self.rows.push(row);
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &DataRow> {
        self.rows.iter()
    }

    /// Returns an iterator over one column's cells, one per row.
    ///
    /// A cell missing from a row reads as [`DataValue::Null`].
    pub fn column_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DataValue> + 'a {
        self.rows.iter().map(move |row| row.get(name).unwrap_or(&NULL_VALUE))
    }
}

impl FromIterator<DataRow> for DataTable {
    fn from_iter<T: IntoIterator<Item = DataRow>>(iter: T) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}
