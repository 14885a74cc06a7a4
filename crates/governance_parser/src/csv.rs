//! CSV dataset loading.
//!
//! Reads a header row and data rows into a [`DataTable`], inferring a type
//! per cell: empty cells become null, integers and floats parse numerically,
//! `true`/`false` become booleans, everything else stays a string. Quoted
//! fields (double quotes, doubled-quote escapes) are supported within a line.

use std::path::Path;

use governance_core::{DataRow, DataTable, DataValue};
use tracing::debug;

use crate::ParserError;

/// Loads a CSV file into a [`DataTable`].
///
/// A missing file is reported as [`ParserError::DataFileMissing`] so callers
/// can skip the dataset and continue. A row with more fields than the header
/// is malformed; a row with fewer leaves the trailing columns null.
pub fn load_csv(path: &Path) -> Result<DataTable, ParserError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(ParserError::DataFileMissing {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    let mut lines = content.lines().enumerate();
    let header = match lines.next() {
        Some((_, line)) => split_record(line),
        None => {
            return Err(ParserError::MalformedCsv {
                path: path.to_path_buf(),
                line: 1,
                detail: "missing header row".to_string(),
            });
        }
    };

    let mut table = DataTable::new(header.clone());
    for (idx, line) in lines {
        if line.is_empty() {
            continue;
        }
        let fields = split_record(line);
        if fields.len() > header.len() {
            return Err(ParserError::MalformedCsv {
                path: path.to_path_buf(),
                line: idx + 1,
                detail: format!(
                    "row has {} fields, header has {}",
                    fields.len(),
                    header.len()
                ),
            });
        }

        let mut row = DataRow::new();
        for (column, field) in header.iter().zip(fields) {
            row.insert(column.clone(), infer_value(&field));
        }
        table.add_row(row);
    }

    debug!(path = %path.display(), rows = table.len(), "CSV dataset loaded");
    Ok(table)
}

/// Splits one CSV record into fields, honoring double-quoted fields and
/// doubled-quote escapes.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Infers a typed cell value from raw CSV text.
fn infer_value(field: &str) -> DataValue {
    if field.is_empty() {
        return DataValue::Null;
    }
    if let Ok(i) = field.parse::<i64>() {
        return DataValue::Int(i);
    }
    if let Ok(f) = field.parse::<f64>() {
        return DataValue::Float(f);
    }
    match field {
        "true" => DataValue::Bool(true),
        "false" => DataValue::Bool(false),
        _ => DataValue::String(field.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_with_type_inference() {
        let (_dir, path) = write_csv(
            "client_id,email,age,monthly_income,active\n\
             1001,user_1@bankdomain.com,34,25000.50,true\n\
             1002,,29,,false\n",
        );

        let table = load_csv(&path).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.columns(),
            ["client_id", "email", "age", "monthly_income", "active"]
        );

        let incomes: Vec<_> = table.column_values("monthly_income").collect();
        assert_eq!(incomes[0], &DataValue::Float(25000.50));
        assert!(incomes[1].is_null());

        let emails: Vec<_> = table.column_values("email").collect();
        assert_eq!(emails[0].as_str(), Some("user_1@bankdomain.com"));
        assert!(emails[1].is_null());

        let active: Vec<_> = table.column_values("active").collect();
        assert_eq!(active[0], &DataValue::Bool(true));
        assert_eq!(active[1], &DataValue::Bool(false));
    }

    #[test]
    fn test_quoted_fields() {
        let (_dir, path) = write_csv(
            "id,name\n\
             1,\"Client, The First\"\n\
             2,\"Says \"\"hi\"\"\"\n",
        );

        let table = load_csv(&path).unwrap();
        let names: Vec<_> = table.column_values("name").collect();

        assert_eq!(names[0].as_str(), Some("Client, The First"));
        assert_eq!(names[1].as_str(), Some("Says \"hi\""));
    }

    #[test]
    fn test_short_row_fills_nulls() {
        let (_dir, path) = write_csv("id,email\n1\n");

        let table = load_csv(&path).unwrap();
        let emails: Vec<_> = table.column_values("email").collect();
        assert!(emails[0].is_null());
    }

    #[test]
    fn test_long_row_is_malformed() {
        let (_dir, path) = write_csv("id,email\n1,a@b.com,extra\n");

        let result = load_csv(&path);
        assert!(matches!(result, Err(ParserError::MalformedCsv { line: 2, .. })));
    }

    #[test]
    fn test_missing_file_is_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");

        let result = load_csv(&path);
        assert!(matches!(result, Err(ParserError::DataFileMissing { .. })));
    }

    #[test]
    fn test_empty_file_is_malformed() {
        let (_dir, path) = write_csv("");

        let result = load_csv(&path);
        assert!(matches!(
            result,
            Err(ParserError::MalformedCsv { line: 1, .. })
        ));
    }

    #[test]
    fn test_trailing_blank_lines_ignored() {
        let (_dir, path) = write_csv("id\n1\n\n\n");

        let table = load_csv(&path).unwrap();
        assert_eq!(table.len(), 1);
    }
}
