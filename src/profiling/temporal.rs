// Temporal distribution statistics

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rayon::prelude::*;

use super::{column_values, parse_timestamp, ratio, ProfilerConfig, TemporalStats};
use crate::data::{RowSet, Value};

/// Computes [`TemporalStats`] for every column with at least one value
/// that parses as a timestamp.
///
/// Only string values are timestamp candidates; plain numeric columns are
/// never reinterpreted as epoch offsets. "Now" is captured once per
/// invocation so every column is measured against the same snapshot.
pub struct TemporalProfiler {
    formats: Vec<String>,
    stale_after_days: i64,
}

impl TemporalProfiler {
    /// Create a temporal profiler from the run configuration.
    pub fn new(config: &ProfilerConfig) -> Self {
        TemporalProfiler {
            formats: config.datetime_formats.clone(),
            stale_after_days: config.stale_after_days,
        }
    }

    /// Profile all columns; columns with no parseable timestamps are
    /// omitted.
    pub fn profile(&self, rows: &RowSet, columns: &[String]) -> BTreeMap<String, TemporalStats> {
        let now = Utc::now();
        columns
            .par_iter()
            .filter_map(|column| {
                self.profile_column(rows, column, now)
                    .map(|stats| (column.clone(), stats))
            })
            .collect()
    }

    fn profile_column(
        &self,
        rows: &RowSet,
        column: &str,
        now: DateTime<Utc>,
    ) -> Option<TemporalStats> {
        let timestamps: Vec<DateTime<Utc>> = column_values(rows, column)
            .into_iter()
            .filter_map(|value| match value {
                Value::String(s) => parse_timestamp(s, &self.formats),
                _ => None,
            })
            .collect();

        if timestamps.is_empty() {
            return None;
        }

        let min = timestamps.iter().min()?;
        let max = timestamps.iter().max()?;

        let stale_before = now - Duration::days(self.stale_after_days);
        let future = timestamps.iter().filter(|&&t| t > now).count();
        let stale = timestamps.iter().filter(|&&t| t < stale_before).count();

        Some(TemporalStats {
            min_timestamp: min.to_rfc3339_opts(SecondsFormat::Secs, true),
            max_timestamp: max.to_rfc3339_opts(SecondsFormat::Secs, true),
            future_timestamp_ratio: ratio(future, timestamps.len()),
            stale_record_ratio: ratio(stale, timestamps.len()),
        })
    }
}
