// Per-column null/uniqueness metrics and sample masking

use std::collections::HashSet;

use rayon::prelude::*;

use super::{column_values, infer_type, ratio, ColumnProfile, MissingPolicy, ProfilerConfig};
use crate::data::RowSet;

/// Computes one [`ColumnProfile`] per column, in first-row key order.
pub struct ColumnProfiler {
    policy: MissingPolicy,
    mask: String,
    max_samples: usize,
    formats: Vec<String>,
}

impl ColumnProfiler {
    /// Create a column profiler from the run configuration.
    pub fn new(config: &ProfilerConfig) -> Self {
        ColumnProfiler {
            policy: config.missing_policy,
            mask: config.sample_mask.clone(),
            max_samples: config.max_sample_values,
            formats: config.datetime_formats.clone(),
        }
    }

    /// Profile every column of the row set.
    pub fn profile(&self, rows: &RowSet, columns: &[String]) -> Vec<ColumnProfile> {
        columns
            .par_iter()
            .map(|column| self.profile_column(rows, column))
            .collect()
    }

    fn profile_column(&self, rows: &RowSet, column: &str) -> ColumnProfile {
        let row_count = rows.row_count();
        let values = column_values(rows, column);

        let present: Vec<_> = values
            .into_iter()
            .filter(|value| !self.policy.is_missing(value))
            .collect();

        let unique: HashSet<String> = present.iter().map(|value| value.to_string()).collect();
        let null_count = row_count - present.len();

        // Sample values are reduced to the configured placeholder; raw
        // data never reaches the report.
        let sample_values_masked = present
            .iter()
            .take(self.max_samples)
            .map(|_| self.mask.clone())
            .collect();

        ColumnProfile {
            column_name: column.to_string(),
            inferred_data_type: infer_type(&present, &self.formats),
            null_count,
            null_ratio: ratio(null_count, row_count),
            unique_count: unique.len(),
            unique_ratio: ratio(unique.len(), row_count),
            sample_values_masked,
        }
    }
}
