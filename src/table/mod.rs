//! In-memory table model for the cleaning pipeline.
//!
//! A [`Table`] is an ordered header list plus ordered rows. Every row holds
//! exactly one field per header. A field is `Option<String>`: `None` is a
//! *missing* value (an empty field in the source file), which is distinct
//! from a real string - including whitespace-only strings.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// One table row: one field per header, in header order.
pub type Row = Vec<Option<String>>;

/// Row/column dataset loaded from a delimited file.
///
/// Rows retain input order; the only rows ever removed are those dropped at
/// load time (malformed or fully missing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in file order.
    pub headers: Vec<String>,
    /// Data rows, in file order.
    pub rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given column names.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Index of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Whether a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether every field of a row is missing.
    pub fn row_is_empty(row: &Row) -> bool {
        row.iter().all(Option::is_none)
    }

    /// Render rows as JSON objects keyed by header, missing fields as `null`.
    ///
    /// Debug view used by the `parse` subcommand.
    pub fn to_json_records(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let mut obj = Map::new();
                for (header, field) in self.headers.iter().zip(row) {
                    let value = match field {
                        Some(s) => json!(s),
                        None => Value::Null,
                    };
                    obj.insert(header.clone(), value);
                }
                Value::Object(obj)
            })
            .collect()
    }
}
