//! Patient record types for the normalization pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A patient record exactly as it appears in the input file.
///
/// Every field is optional and `age`/`name` are raw JSON values: source data
/// routinely carries ages as strings ("32"), numbers, or garbage, and the
/// normalizer decides what to do with each case.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPatient {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
}

/// A normalized patient record.
///
/// Invariants upheld by the normalizer: `name` is title-cased, `age >= 18`,
/// and no two structurally-equal records appear in one output batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedPatient {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub diagnosis: String,
}

impl From<CleanedPatient> for RawPatient {
    fn from(patient: CleanedPatient) -> Self {
        Self {
            name: Some(Value::String(patient.name)),
            age: Some(Value::from(patient.age)),
            gender: Some(patient.gender),
            diagnosis: Some(patient.diagnosis),
        }
    }
}
