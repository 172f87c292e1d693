// Report types: the wire contract returned to callers

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::InferredType;

/// Dataset-level summary of one profiling invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Fresh unique identifier, minted per invocation.
    pub dataset_id: String,
    pub dataset_name: String,
    pub row_count: usize,
    /// Number of keys in the first row, or 0 for an empty row set.
    pub column_count: usize,
    /// Placeholder until domain detection exists.
    pub detected_domain: String,
    /// Capture time, ISO 8601 UTC.
    pub ingestion_timestamp: String,
}

impl DatasetSummary {
    /// Capture a summary for the current invocation.
    pub fn capture(dataset_name: &str, row_count: usize, column_count: usize) -> Self {
        DatasetSummary {
            dataset_id: Uuid::new_v4().to_string(),
            dataset_name: dataset_name.to_string(),
            row_count,
            column_count,
            detected_domain: "Unknown".to_string(),
            ingestion_timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Per-column type and quality metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub column_name: String,
    pub inferred_data_type: InferredType,
    pub null_count: usize,
    pub null_ratio: f64,
    pub unique_count: usize,
    pub unique_ratio: f64,
    /// Up to three masked placeholders; raw values are never exposed.
    pub sample_values_masked: Vec<String>,
}

/// Distribution statistics for a column with numeric content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericStats {
    pub min_value: f64,
    pub max_value: f64,
    pub mean: f64,
    pub negative_value_ratio: f64,
}

/// Frequency statistics for a column's non-falsy values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalStats {
    pub distinct_values: usize,
    /// Value labels in descending-frequency order, first-occurrence
    /// tie-break.
    pub top_values: Vec<String>,
}

/// Timestamp statistics for a column with parseable datetimes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalStats {
    pub min_timestamp: String,
    pub max_timestamp: String,
    pub future_timestamp_ratio: f64,
    pub stale_record_ratio: f64,
}

/// Match ratios per named pattern, keyed `<pattern_name>_match_ratio`.
pub type PatternStats = BTreeMap<String, f64>;

/// Boolean sensitivity signals derived from column names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceFlags {
    pub kyc_fields_present: bool,
    pub monetary_fields_present: bool,
    pub personal_data_present: bool,
}

/// The complete metadata report: the sole artifact returned to callers.
///
/// Lifecycle is create-once, return, discard; nothing is persisted. The
/// serialized field names are a stable contract for external consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataReport {
    pub dataset: DatasetSummary,
    pub columns: Vec<ColumnProfile>,
    pub numeric_stats: BTreeMap<String, NumericStats>,
    pub categorical_stats: BTreeMap<String, CategoricalStats>,
    pub temporal_stats: BTreeMap<String, TemporalStats>,
    pub patterns: BTreeMap<String, PatternStats>,
    pub compliance_flags: ComplianceFlags,
}
