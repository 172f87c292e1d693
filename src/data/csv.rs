// CSV row-set acquisition (the flat-file boundary of the profiler)

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{DataError, Row, RowSet, Value};

/// Reads delimited text into a [`RowSet`].
///
/// The header row defines column names and their order; every data row is
/// materialized as an ordered name-to-value mapping. Empty cells become
/// [`Value::Null`]; all other cells are carried as strings and left to the
/// profiler's type inference.
pub struct CsvRowSource {
    has_header: bool,
    delimiter: u8,
}

impl Default for CsvRowSource {
    fn default() -> Self {
        CsvRowSource {
            has_header: true,
            delimiter: b',',
        }
    }
}

impl CsvRowSource {
    /// Create a source with the default comma delimiter and a header row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source with an explicit delimiter and header setting.
    pub fn with_options(has_header: bool, delimiter: u8) -> Self {
        CsvRowSource {
            has_header,
            delimiter,
        }
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

    /// Read a row set from an already-loaded byte buffer (e.g. an upload).
    pub fn from_bytes(&self, bytes: &[u8], source_name: &str) -> Result<RowSet, DataError> {
        self.read(bytes, source_name)
    }

    /// Read a row set from any reader.
    ///
    /// An input with no data rows yields an empty row set, not an error;
    /// the profiler defines its behavior on empty input.
    pub fn read<R: Read>(&self, reader: R, source_name: &str) -> Result<RowSet, DataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_header)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.records() {
            records.push(result?);
        }

        // Column names come from the header row, or are generated when the
        // input has none.
        let columns: Vec<String> = if self.has_header {
            csv_reader
                .headers()?
                .iter()
                .map(str::to_string)
                .collect()
        } else {
            let width = records.first().map_or(0, |record| record.len());
            (0..width).map(|i| format!("column_{}", i)).collect()
        };

        let rows = records
            .iter()
            .map(|record| {
                let pairs = columns
                    .iter()
                    .enumerate()
                    .map(|(i, column)| {
                        let value = match record.get(i) {
                            None => Value::Null,
                            Some("") => Value::Null,
                            Some(cell) => Value::String(cell.to_string()),
                        };
                        (column.clone(), value)
                    })
                    .collect();
                Row::from_pairs(pairs)
            })
            .collect();

        Ok(RowSet::new(source_name, rows))
    }
}
