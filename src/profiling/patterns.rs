// Structural pattern detection over column values

use std::collections::BTreeMap;

use rayon::prelude::*;
use regex::Regex;

use super::{column_values, ratio, PatternSpec, PatternStats, ProfilingError};
use crate::data::RowSet;

/// Tests column values against a registry of named regex matchers.
///
/// Each matcher with at least one match on a column contributes a
/// `<name>_match_ratio` entry for that column; a column with no matching
/// pattern is absent from the output. The built-in registry holds a
/// single matcher named `regex` ("three uppercase letters then digits"),
/// whose report field is therefore `regex_match_ratio`.
pub struct PatternDetector {
    patterns: Vec<(String, Regex)>,
}

impl PatternDetector {
    /// Compile a pattern registry. An invalid expression is rejected with
    /// the pattern's name in the error.
    pub fn new(specs: &[PatternSpec]) -> Result<Self, ProfilingError> {
        let mut patterns = Vec::with_capacity(specs.len());
        for spec in specs {
            let regex = Regex::new(&spec.regex).map_err(|source| ProfilingError::InvalidPattern {
                name: spec.name.clone(),
                source,
            })?;
            patterns.push((spec.name.clone(), regex));
        }
        Ok(PatternDetector { patterns })
    }

    /// Detect patterns over all columns.
    pub fn detect(&self, rows: &RowSet, columns: &[String]) -> BTreeMap<String, PatternStats> {
        columns
            .par_iter()
            .filter_map(|column| {
                self.detect_column(rows, column)
                    .map(|stats| (column.clone(), stats))
            })
            .collect()
    }

    fn detect_column(&self, rows: &RowSet, column: &str) -> Option<PatternStats> {
        let labels: Vec<String> = column_values(rows, column)
            .into_iter()
            .filter(|value| !value.is_falsy())
            .map(|value| value.to_string())
            .collect();

        if labels.is_empty() {
            return None;
        }

        let mut ratios = PatternStats::new();
        for (name, regex) in &self.patterns {
            let matches = labels.iter().filter(|label| regex.is_match(label)).count();
            if matches > 0 {
                ratios.insert(
                    format!("{}_match_ratio", name),
                    ratio(matches, labels.len()),
                );
            }
        }

        if ratios.is_empty() {
            None
        } else {
            Some(ratios)
        }
    }
}
