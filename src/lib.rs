// Rust Data Profiling Engine

//! # Rust Data Profiling Engine
//!
//! A dataset profiling engine written in Rust.
//!
//! Given a bounded, in-memory row set — acquired from a delimited file, a
//! JSON array of documents, or any source that can produce ordered
//! name-to-value rows — the engine computes a structured metadata report:
//!
//! - Dataset summary (row/column counts, fresh dataset id, capture time)
//! - Per-column type inference and null/uniqueness metrics with masked
//!   sample values
//! - Numeric, categorical, and temporal distribution statistics
//! - Structural pattern signals from a configurable regex registry
//! - Compliance-sensitivity flags derived from column names
//!
//! The report is a create-once, return, discard artifact: nothing is
//! persisted, and its serialized field names are a stable contract.
//!
//! ## Example
//!
//! ```rust
//! use rust_data_profiling_engine::{
//!     data::{Row, RowSet, Value},
//!     profiling::{Profiler, ProfilerConfig},
//! };
//!
//! let mut first = Row::new();
//! first.insert("user_email", Value::String("ada@example.com".to_string()));
//! first.insert("amount", Value::Integer(120));
//!
//! let mut second = Row::new();
//! second.insert("user_email", Value::Null);
//! second.insert("amount", Value::Integer(-5));
//!
//! let rows = RowSet::new("payments", vec![first, second]);
//!
//! let profiler = Profiler::new(ProfilerConfig::default()).unwrap();
//! let report = profiler.profile(&rows);
//!
//! assert_eq!(report.dataset.row_count, 2);
//! assert_eq!(report.dataset.column_count, 2);
//! assert!(report.compliance_flags.personal_data_present);
//! assert!(report.compliance_flags.monetary_fields_present);
//! assert_eq!(report.numeric_stats["amount"].min_value, -5.0);
//! ```

pub mod data;
pub mod profiling;
pub mod utils;

// Re-export main types
pub use data::{CsvRowSource, DataError, JsonRowSource, Row, RowSet, Value};
pub use profiling::{MetadataReport, Profiler, ProfilerConfig, ProfilingError};
pub use utils::Config;
