use std::path::PathBuf;

use triage_model::Rejection;

/// Outcome of one pipeline run, used for the console summary and exit code.
#[derive(Debug)]
pub struct RunResult {
    pub pipeline: &'static str,
    pub input: PathBuf,
    /// Records loaded from the input file (0 when the file was unreadable).
    pub loaded: usize,
    /// Records that made it into the report.
    pub reported: usize,
    pub rejections: Vec<Rejection>,
    /// Aggregate dosage total in mg; only the dosage pipeline sets this.
    pub total: Option<f64>,
}

impl RunResult {
    pub fn has_rejections(&self) -> bool {
        !self.rejections.is_empty()
    }
}
