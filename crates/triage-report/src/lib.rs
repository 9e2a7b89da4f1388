//! Console report rendering.
//!
//! The line formats here are a contract with downstream consumers of the
//! console output; change them deliberately. All dosage values are rounded
//! to two decimals at this layer only; the computed results carry full
//! precision.

use std::fmt::Write as _;

use triage_model::{CleanedPatient, DosageResult};

/// One report line per cleaned patient.
#[must_use]
pub fn patient_line(patient: &CleanedPatient) -> String {
    format!(
        "Name: {}, Age: {}, Diagnosis: {}",
        patient.name, patient.age, patient.diagnosis
    )
}

/// The full patient report, or an empty string for an empty batch.
///
/// Callers decide whether to print by checking the batch length; an empty
/// batch produces no output at all, not an empty header.
#[must_use]
pub fn render_patient_report(patients: &[CleanedPatient]) -> String {
    if patients.is_empty() {
        return String::new();
    }
    let mut out = String::from("Cleaned Patient Data:\n");
    for patient in patients {
        let _ = writeln!(out, "{}", patient_line(patient));
    }
    out
}

/// The report lines for one dosage result: the dosage line, an optional
/// loading-dose note, and an optional warnings line.
#[must_use]
pub fn dosage_lines(result: &DosageResult) -> Vec<String> {
    let mut lines = vec![format!(
        "Name: {}, Medication: {}, Base Dosage: {:.2} mg, Final Dosage: {:.2} mg",
        result.name, result.medication, result.base_dosage, result.final_dosage
    )];
    if result.loading_dose_applied {
        lines.push("  * Loading dose applied".to_string());
    }
    if !result.warnings.is_empty() {
        lines.push(format!("  * Warnings: {}", result.warnings.join(", ")));
    }
    lines
}

/// The full dosage report including the trailing total line.
#[must_use]
pub fn render_dosage_report(results: &[DosageResult], total: f64) -> String {
    let mut out = String::from("Medication Dosages:\n");
    for result in results {
        for line in dosage_lines(result) {
            let _ = writeln!(out, "{line}");
        }
    }
    let _ = write!(out, "\nTotal medication needed: {total:.2} mg");
    out
}
