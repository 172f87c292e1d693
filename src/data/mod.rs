// Data module for the in-memory row model consumed by the profiler

mod csv;
mod json;

pub use csv::*;
pub use json::*;

use thiserror::Error;

/// A raw scalar value observed in a row.
///
/// The profiler never interprets values beyond these variants: anything a
/// source cannot represent as a scalar is carried as a string label.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Whether this value is the explicit null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this value is "falsy": null, empty string, zero, or false.
    ///
    /// The categorical profiler and the pattern detector drop falsy values
    /// before counting.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Boolean(b) => !b,
            Value::Integer(i) => *i == 0,
            Value::Float(f) => *f == 0.0,
            Value::String(s) => s.is_empty(),
        }
    }

    /// Coerce this value to a number, if possible.
    ///
    /// Integers and floats coerce directly; strings coerce when their
    /// trimmed content parses as a float. Nulls and booleans never coerce.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

/// A single record: an ordered mapping from column name to raw value.
///
/// Rows in one [`RowSet`] need not share identical key sets; the profiler
/// enumerates columns from the first row only and treats absent keys as
/// null. Insertion order is preserved and defines column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    entries: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Row { entries: Vec::new() }
    }

    /// Create a row from (column, value) pairs, preserving their order.
    pub fn from_pairs(pairs: Vec<(String, Value)>) -> Self {
        Row { entries: pairs }
    }

    /// Append a column to the row.
    pub fn insert<S: Into<String>>(&mut self, column: S, value: Value) {
        self.entries.push((column.into(), value));
    }

    /// Get the value for a column, if present.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Iterate column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of columns in this row.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this row has no columns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A bounded, fully materialized sequence of rows plus a source name.
///
/// Immutable once acquired: the profiler borrows it and never mutates it.
#[derive(Debug, Clone, Default)]
pub struct RowSet {
    pub source_name: String,
    pub rows: Vec<Row>,
}

impl RowSet {
    /// Create a row set from already-acquired rows.
    pub fn new<S: Into<String>>(source_name: S, rows: Vec<Row>) -> Self {
        RowSet {
            source_name: source_name.into(),
            rows,
        }
    }

    /// Number of rows in the set.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the set contains no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in first-row key order, or empty for an empty set.
    ///
    /// This is the column list every profiling stage works from; keys that
    /// only appear in later rows are ignored by contract.
    pub fn column_names(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.column_names().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Represents an error while acquiring a row set.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid document at index {index}: {message}")]
    InvalidDocument { index: usize, message: String },
}
