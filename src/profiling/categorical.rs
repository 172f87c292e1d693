// Categorical frequency statistics

use std::collections::BTreeMap;
use std::collections::HashMap;

use rayon::prelude::*;

use super::{column_values, CategoricalStats, ProfilerConfig};
use crate::data::RowSet;

/// Computes [`CategoricalStats`] for every column with at least one
/// non-falsy value.
///
/// Values are counted by their string label. The top-K ordering is
/// descending by frequency with first-occurrence index as the tie-break,
/// which makes the result deterministic and reproducible across runs.
pub struct CategoricalProfiler {
    max_top_values: usize,
}

impl CategoricalProfiler {
    /// Create a categorical profiler from the run configuration.
    pub fn new(config: &ProfilerConfig) -> Self {
        CategoricalProfiler {
            max_top_values: config.max_top_values,
        }
    }

    /// Profile all columns; columns with no surviving values are omitted.
    pub fn profile(&self, rows: &RowSet, columns: &[String]) -> BTreeMap<String, CategoricalStats> {
        columns
            .par_iter()
            .filter_map(|column| {
                self.profile_column(rows, column)
                    .map(|stats| (column.clone(), stats))
            })
            .collect()
    }

    fn profile_column(&self, rows: &RowSet, column: &str) -> Option<CategoricalStats> {
        // label -> (frequency, first-occurrence index)
        let mut frequencies: HashMap<String, (usize, usize)> = HashMap::new();
        let mut next_index = 0usize;

        for value in column_values(rows, column) {
            if value.is_falsy() {
                continue;
            }
            let entry = frequencies
                .entry(value.to_string())
                .or_insert_with(|| {
                    let index = next_index;
                    next_index += 1;
                    (0, index)
                });
            entry.0 += 1;
        }

        if frequencies.is_empty() {
            return None;
        }

        let distinct_values = frequencies.len();

        let mut sorted: Vec<(String, (usize, usize))> = frequencies.into_iter().collect();
        sorted.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

        let top_values = sorted
            .into_iter()
            .take(self.max_top_values)
            .map(|(label, _)| label)
            .collect();

        Some(CategoricalStats {
            distinct_values,
            top_values,
        })
    }
}
