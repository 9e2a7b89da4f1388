pub mod dosage;
pub mod error;
pub mod formulary;
pub mod patient;

pub use dosage::{DosageRequest, DosageResult};
pub use error::{Rejection, Result, TriageError};
pub use formulary::Formulary;
pub use patient::{CleanedPatient, RawPatient};
