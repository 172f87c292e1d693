// JSON row-set acquisition (the document-store boundary of the profiler)

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value as JsonValue;

use super::{DataError, Row, RowSet, Value};

/// Reads a JSON array of documents into a [`RowSet`].
///
/// Each array element must be an object; a non-object element fails fast
/// with a descriptive error rather than producing a partial row set.
/// Document key order is preserved and becomes the column order of the
/// row. Nested arrays and objects are carried as compact-JSON string
/// labels so the profiler can still count and match them.
pub struct JsonRowSource;

impl JsonRowSource {
    /// Create a new JSON row source.
    pub fn new() -> Self {
        JsonRowSource
    }

    /// Read a row set from a file on disk. The file name becomes the
    /// source name.
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<RowSet, DataError> {
        let source_name = path
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.as_ref().to_string_lossy().to_string());

        let file = File::open(path.as_ref())?;
        self.read(BufReader::new(file), &source_name)
    }

    /// Read a row set from an already-loaded byte buffer.
    pub fn from_bytes(&self, bytes: &[u8], source_name: &str) -> Result<RowSet, DataError> {
        self.read(bytes, source_name)
    }

    /// Read a row set from any reader containing a JSON array of objects.
    pub fn read<R: Read>(&self, reader: R, source_name: &str) -> Result<RowSet, DataError> {
        let json: JsonValue = serde_json::from_reader(reader)?;

        let documents = json.as_array().ok_or_else(|| DataError::InvalidDocument {
            index: 0,
            message: "JSON root is not an array of documents".to_string(),
        })?;

        let mut rows = Vec::with_capacity(documents.len());
        for (index, document) in documents.iter().enumerate() {
            let object = document.as_object().ok_or_else(|| DataError::InvalidDocument {
                index,
                message: format!("expected an object, found {}", json_kind(document)),
            })?;

            let pairs = object
                .iter()
                .map(|(key, value)| (key.clone(), Self::json_to_value(value)))
                .collect();
            rows.push(Row::from_pairs(pairs));
        }

        Ok(RowSet::new(source_name, rows))
    }

    /// Convert a JSON value to a row value.
    fn json_to_value(json: &JsonValue) -> Value {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Boolean(*b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => Value::String(s.clone()),
            // Nested structures are flattened to their compact JSON text.
            other => Value::String(other.to_string()),
        }
    }
}

impl Default for JsonRowSource {
    fn default() -> Self {
        Self::new()
    }
}

fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
