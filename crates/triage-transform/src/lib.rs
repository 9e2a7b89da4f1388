//! Pipeline transformation cores.
//!
//! Both pipelines share the same shape: a pure function over an in-memory
//! record sequence that returns the transformed records plus any per-record
//! rejections. Rejections never abort the batch; the offending record is
//! dropped and the rest of the input is processed in order.

pub mod dosage;
pub mod patients;

pub use dosage::{DosageBatch, compute_all, compute_dosage};
pub use patients::{ADULT_AGE, PatientBatch, normalize_patients, title_case};
