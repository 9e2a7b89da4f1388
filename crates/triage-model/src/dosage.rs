//! Medication dosage request and result types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dosage request as loaded from the input file.
///
/// `weight` stays a raw JSON value so a non-numeric weight can be rejected
/// per record instead of failing the whole document parse. `is_first_dose`
/// defaults to false and `allergies` to empty when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DosageRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub weight: Option<Value>,
    #[serde(default)]
    pub medication: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub is_first_dose: bool,
    #[serde(default)]
    pub allergies: Vec<String>,
}

/// The computed dosage for one request: all input fields plus the derived
/// dosage values and any medication advisories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DosageResult {
    pub name: String,
    pub weight: f64,
    pub medication: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    pub is_first_dose: bool,
    pub allergies: Vec<String>,
    /// `weight * factor`, before any loading-dose adjustment.
    pub base_dosage: f64,
    pub loading_dose_applied: bool,
    /// `base_dosage`, doubled when a loading dose applies.
    pub final_dosage: f64,
    pub warnings: Vec<String>,
}
