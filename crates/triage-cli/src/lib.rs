//! Triage CLI library surface.
//!
//! Exposed as a library so the pipeline commands can be exercised directly
//! by integration tests.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
