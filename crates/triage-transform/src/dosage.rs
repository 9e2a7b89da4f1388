//! Weight-based dosage calculation.
//!
//! Dosing formula: `base = weight (kg) * factor (mg/kg)`; the base is
//! doubled for the first dose of a loading-dose medication. An unknown
//! medication looks up a factor of 0.0 and so yields a zero dosage with no
//! warning. That permissive policy is deliberate and pinned by tests.

use tracing::{debug, warn};

use triage_model::{DosageRequest, DosageResult, Formulary, Rejection, Result, TriageError};

/// Outcome of computing one input batch.
#[derive(Debug, Default)]
pub struct DosageBatch {
    /// Per-record results, input order preserved.
    pub results: Vec<DosageResult>,
    /// Sum of `final_dosage` over all results, accumulated in input order.
    pub total: f64,
    /// Records rejected for a missing or non-numeric weight.
    pub rejections: Vec<Rejection>,
}

/// Compute the final dosage for a single request.
///
/// # Errors
///
/// Returns a field error when `weight` is missing or not numeric.
pub fn compute_dosage(request: &DosageRequest, formulary: &Formulary) -> Result<f64> {
    Ok(result_for(request, formulary)?.final_dosage)
}

/// Compute dosages for a whole batch plus the aggregate total.
///
/// Rejected records contribute nothing to `results` or `total`; the rest of
/// the batch is processed in input order.
pub fn compute_all(requests: &[DosageRequest], formulary: &Formulary) -> DosageBatch {
    let mut batch = DosageBatch::default();
    for (index, request) in requests.iter().enumerate() {
        match result_for(request, formulary) {
            Ok(result) => {
                batch.total += result.final_dosage;
                batch.results.push(result);
            }
            Err(error) => {
                warn!(record = index, %error, "dosage record rejected");
                batch.rejections.push(Rejection { index, error });
            }
        }
    }
    debug!(
        results = batch.results.len(),
        rejected = batch.rejections.len(),
        total = batch.total,
        "dosage batch complete"
    );
    batch
}

fn result_for(request: &DosageRequest, formulary: &Formulary) -> Result<DosageResult> {
    let weight = numeric_weight(request)?;
    let medication = request.medication.clone().unwrap_or_default();
    let base_dosage = weight * formulary.factor(&medication);
    let loading_dose_applied = request.is_first_dose && formulary.uses_loading_dose(&medication);
    let final_dosage = if loading_dose_applied {
        base_dosage * 2.0
    } else {
        base_dosage
    };
    let warnings = formulary
        .advisory(&medication)
        .map(str::to_string)
        .into_iter()
        .collect();
    Ok(DosageResult {
        name: request.name.clone(),
        weight,
        medication,
        condition: request.condition.clone(),
        is_first_dose: request.is_first_dose,
        allergies: request.allergies.clone(),
        base_dosage,
        loading_dose_applied,
        final_dosage,
        warnings,
    })
}

fn numeric_weight(request: &DosageRequest) -> Result<f64> {
    match request.weight.as_ref() {
        Some(value) => value
            .as_f64()
            .ok_or_else(|| TriageError::field("weight", "is not numeric")),
        None => Err(TriageError::field("weight", "is missing")),
    }
}
