// Profiling module: the row-set-to-metadata pipeline

mod categorical;
mod columns;
mod compliance;
mod config;
mod infer;
mod numeric;
mod patterns;
mod report;
mod temporal;

pub use categorical::*;
pub use columns::*;
pub use compliance::*;
pub use config::*;
pub use infer::*;
pub use numeric::*;
pub use patterns::*;
pub use report::*;
pub use temporal::*;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::debug;
use thiserror::Error;

use crate::data::{RowSet, Value};

/// Represents an error in the profiling module.
#[derive(Debug, Error)]
pub enum ProfilingError {
    #[error("invalid pattern '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// Profiles a row set into a [`MetadataReport`].
///
/// All classification rules (missing-value policy, datetime formats,
/// pattern registry, compliance keywords) come from the
/// [`ProfilerConfig`] the profiler was built with; there is no global
/// state. Profiling itself is deterministic and infallible: degenerate
/// input such as an empty row set produces zero counts and zero ratios,
/// never an error.
pub struct Profiler {
    config: ProfilerConfig,
    detector: PatternDetector,
}

impl Profiler {
    /// Create a profiler, compiling the configured pattern registry.
    pub fn new(config: ProfilerConfig) -> Result<Self, ProfilingError> {
        let detector = PatternDetector::new(&config.patterns)?;
        Ok(Profiler { config, detector })
    }

    /// Profile a row set and assemble the metadata report.
    ///
    /// The stat profilers are independent pure functions over the same
    /// first-row-derived column list; they run column-parallel and their
    /// outputs are merged only here.
    pub fn profile(&self, rows: &RowSet) -> MetadataReport {
        let columns = rows.column_names();
        debug!(
            "profiling '{}': {} rows, {} columns",
            rows.source_name,
            rows.row_count(),
            columns.len()
        );

        let dataset = DatasetSummary::capture(&rows.source_name, rows.row_count(), columns.len());
        let column_profiles = ColumnProfiler::new(&self.config).profile(rows, &columns);

        let numeric_stats = NumericProfiler::new().profile(rows, &columns);
        let categorical_stats = CategoricalProfiler::new(&self.config).profile(rows, &columns);
        let temporal_stats = TemporalProfiler::new(&self.config).profile(rows, &columns);
        let patterns = self.detector.detect(rows, &columns);
        let compliance_flags = ComplianceFlagger::new(&self.config.compliance).flag(&column_profiles);

        MetadataReport {
            dataset,
            columns: column_profiles,
            numeric_stats,
            categorical_stats,
            temporal_stats,
            patterns,
            compliance_flags,
        }
    }
}

/// Profile a row set with the default configuration.
pub fn profile(rows: &RowSet) -> Result<MetadataReport, ProfilingError> {
    Ok(Profiler::new(ProfilerConfig::default())?.profile(rows))
}

/// Ratio with an explicit zero-denominator guard.
///
/// Every ratio the profiler emits goes through here, so an empty row set
/// (or an empty value list) yields 0.0 rather than NaN.
pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Gather a column's value across all rows, treating absent keys as null.
pub(crate) fn column_values<'a>(rows: &'a RowSet, column: &str) -> Vec<&'a Value> {
    const NULL: &Value = &Value::Null;
    rows.rows
        .iter()
        .map(|row| row.get(column).unwrap_or(NULL))
        .collect()
}

/// Parse a raw string as a UTC timestamp against the configured formats.
///
/// RFC 3339 is always tried first; each configured format is then tried
/// as a full datetime and finally as a bare date (midnight UTC).
pub(crate) fn parse_timestamp(raw: &str, formats: &[String]) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in formats {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&datetime));
        }
    }

    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&midnight));
        }
    }

    None
}
