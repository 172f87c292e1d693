// Profiler configuration: every classification rule is explicit

use serde::{Deserialize, Serialize};

use crate::data::Value;

/// What counts as a missing value when computing null metrics.
///
/// The relational acquisition path historically treated only real nulls
/// as missing, while the file and document paths also excluded empty
/// strings; the policy makes that choice explicit per source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Only explicit nulls (and absent keys) are missing.
    NullOnly,
    /// Nulls, absent keys, and empty strings are missing.
    NullOrEmpty,
}

impl MissingPolicy {
    /// Whether a value counts as missing under this policy.
    pub fn is_missing(&self, value: &Value) -> bool {
        match self {
            MissingPolicy::NullOnly => value.is_null(),
            MissingPolicy::NullOrEmpty => match value {
                Value::Null => true,
                Value::String(s) => s.is_empty(),
                _ => false,
            },
        }
    }
}

/// A named structural pattern to test column values against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Registry name; the report field becomes `<name>_match_ratio`.
    pub name: String,
    /// Regular expression applied to each value label.
    pub regex: String,
}

/// Keyword sets driving the compliance flags.
///
/// A flag is raised when any lower-cased column name contains any keyword
/// of its set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceKeywords {
    pub kyc: Vec<String>,
    pub monetary: Vec<String>,
    pub personal: Vec<String>,
}

impl Default for ComplianceKeywords {
    fn default() -> Self {
        ComplianceKeywords {
            kyc: vec!["kyc".to_string(), "address".to_string()],
            monetary: vec!["amount".to_string(), "price".to_string()],
            personal: vec![
                "name".to_string(),
                "email".to_string(),
                "phone".to_string(),
            ],
        }
    }
}

/// Configuration for one profiling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerConfig {
    /// Missing-value definition used by the column profiler.
    pub missing_policy: MissingPolicy,
    /// Placeholder substituted for sampled values in the report.
    pub sample_mask: String,
    /// Maximum number of masked sample values per column.
    pub max_sample_values: usize,
    /// Maximum number of top values in the categorical stats.
    pub max_top_values: usize,
    /// Records older than this many days count as stale.
    pub stale_after_days: i64,
    /// Datetime formats tried (after RFC 3339) when parsing timestamps.
    pub datetime_formats: Vec<String>,
    /// Named pattern registry for the pattern detector.
    pub patterns: Vec<PatternSpec>,
    /// Keyword sets for the compliance flagger.
    pub compliance: ComplianceKeywords,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        ProfilerConfig {
            missing_policy: MissingPolicy::NullOrEmpty,
            sample_mask: "***".to_string(),
            max_sample_values: 3,
            max_top_values: 3,
            stale_after_days: 365,
            datetime_formats: vec![
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%d".to_string(),
                "%Y/%m/%d".to_string(),
                "%m/%d/%Y".to_string(),
            ],
            patterns: vec![PatternSpec {
                // Named "regex" so the default report field keeps the
                // established name `regex_match_ratio`.
                name: "regex".to_string(),
                regex: r"^[A-Z]{3}\d+".to_string(),
            }],
            compliance: ComplianceKeywords::default(),
        }
    }
}
