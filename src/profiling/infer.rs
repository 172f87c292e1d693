// Column type inference

use serde::{Deserialize, Serialize};

use super::parse_timestamp;
use crate::data::Value;

/// The data type inferred for a column from its non-missing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferredType {
    Numeric,
    Datetime,
    String,
}

impl std::fmt::Display for InferredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InferredType::Numeric => write!(f, "numeric"),
            InferredType::Datetime => write!(f, "datetime"),
            InferredType::String => write!(f, "string"),
        }
    }
}

/// Infer the type of a column from its non-missing values.
///
/// A column is `numeric` when every value coerces to a number, else
/// `datetime` when every value parses as a timestamp, else `string`.
/// The numeric check runs first: a column of all-digit strings is
/// numeric, not a datetime. A column with no values to disprove any type
/// defaults to `string`.
pub fn infer_type(values: &[&Value], formats: &[String]) -> InferredType {
    if values.is_empty() {
        return InferredType::String;
    }

    if values.iter().all(|value| value.as_number().is_some()) {
        return InferredType::Numeric;
    }

    let all_timestamps = values.iter().all(|value| match value {
        Value::String(s) => parse_timestamp(s, formats).is_some(),
        _ => false,
    });
    if all_timestamps {
        return InferredType::Datetime;
    }

    InferredType::String
}
