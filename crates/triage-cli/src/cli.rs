//! CLI argument definitions for the triage pipelines.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "triage",
    version,
    about = "Triage record pipelines - clean patient records and compute medication dosages",
    long_about = "Process emergency-department record files.\n\n\
                  `patients` normalizes, age-filters, and deduplicates patient records.\n\
                  `dosages` computes weight-based medication dosages with loading-dose\n\
                  handling and per-medication advisories."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a patient record file and print the retained records.
    Patients(PatientsArgs),

    /// Compute medication dosages for a request file.
    Dosages(DosagesArgs),

    /// List the formulary: known medications, factors, and advisories.
    Medications,
}

#[derive(Parser)]
pub struct PatientsArgs {
    /// Path to the patient record JSON file.
    #[arg(value_name = "FILE", default_value = "data/raw/patients.json")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct DosagesArgs {
    /// Path to the dosage request JSON file.
    #[arg(value_name = "FILE", default_value = "data/meds.json")]
    pub file: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
