// Numeric distribution statistics

use std::collections::BTreeMap;

use rayon::prelude::*;

use super::{column_values, ratio, NumericStats};
use crate::data::RowSet;

/// Computes [`NumericStats`] for every column with at least one value
/// that coerces to a number.
///
/// Coercion is strict: nulls, booleans, and non-numeric strings are
/// discarded rather than mapped to zero, so a sparse numeric column is
/// summarized from its actual numbers only.
pub struct NumericProfiler;

impl NumericProfiler {
    /// Create a numeric profiler.
    pub fn new() -> Self {
        NumericProfiler
    }

    /// Profile all columns; non-numeric columns are omitted entirely.
    pub fn profile(&self, rows: &RowSet, columns: &[String]) -> BTreeMap<String, NumericStats> {
        columns
            .par_iter()
            .filter_map(|column| {
                self.profile_column(rows, column)
                    .map(|stats| (column.clone(), stats))
            })
            .collect()
    }

    fn profile_column(&self, rows: &RowSet, column: &str) -> Option<NumericStats> {
        let numbers: Vec<f64> = column_values(rows, column)
            .into_iter()
            .filter_map(|value| value.as_number())
            .collect();

        if numbers.is_empty() {
            return None;
        }

        let min_value = numbers.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max_value = numbers.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;
        let negatives = numbers.iter().filter(|&&n| n < 0.0).count();

        Some(NumericStats {
            min_value,
            max_value,
            mean,
            negative_value_ratio: ratio(negatives, numbers.len()),
        })
    }
}

impl Default for NumericProfiler {
    fn default() -> Self {
        Self::new()
    }
}
