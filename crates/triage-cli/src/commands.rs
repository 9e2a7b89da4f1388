use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use triage_ingest::load_records;
use triage_model::{DosageRequest, Formulary, RawPatient};
use triage_report::{render_dosage_report, render_patient_report};
use triage_transform::{compute_all, normalize_patients};

use crate::cli::{DosagesArgs, PatientsArgs};
use crate::summary::apply_table_style;
use crate::types::RunResult;

/// Run pipeline A: load, normalize, and report patient records.
pub fn run_patients(args: &PatientsArgs) -> Result<RunResult> {
    let span = info_span!("patients", file = %args.file.display());
    let _guard = span.enter();

    let records: Vec<RawPatient> = load_records(&args.file);
    let loaded = records.len();
    let batch = normalize_patients(&records);
    if !batch.patients.is_empty() {
        print!("{}", render_patient_report(&batch.patients));
    }
    info!(
        loaded,
        retained = batch.patients.len(),
        rejected = batch.rejections.len(),
        "patient pipeline complete"
    );
    Ok(RunResult {
        pipeline: "patients",
        input: args.file.clone(),
        loaded,
        reported: batch.patients.len(),
        rejections: batch.rejections,
        total: None,
    })
}

/// Run pipeline B: load dosage requests, compute dosages, and report.
pub fn run_dosages(args: &DosagesArgs) -> Result<RunResult> {
    let span = info_span!("dosages", file = %args.file.display());
    let _guard = span.enter();

    let formulary = Formulary::standard();
    let requests: Vec<DosageRequest> = load_records(&args.file);
    let loaded = requests.len();
    let batch = compute_all(&requests, &formulary);
    println!("{}", render_dosage_report(&batch.results, batch.total));
    info!(
        loaded,
        computed = batch.results.len(),
        rejected = batch.rejections.len(),
        total = batch.total,
        "dosage pipeline complete"
    );
    Ok(RunResult {
        pipeline: "dosages",
        input: args.file.clone(),
        loaded,
        reported: batch.results.len(),
        rejections: batch.rejections,
        total: Some(batch.total),
    })
}

/// List the formulary tables.
pub fn run_medications() -> Result<()> {
    let formulary = Formulary::standard();
    let mut table = Table::new();
    table.set_header(vec!["Medication", "Factor (mg/kg)", "Loading dose", "Advisory"]);
    apply_table_style(&mut table);
    for (medication, factor) in formulary.medications() {
        table.add_row(vec![
            medication.to_string(),
            format!("{factor}"),
            if formulary.uses_loading_dose(medication) {
                "yes".to_string()
            } else {
                "-".to_string()
            },
            formulary.advisory(medication).unwrap_or("-").to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
