//! The formulary: fixed medication dosing tables.
//!
//! Factors are standard weight-based dosing guidelines in mg per kg of body
//! weight. The formulary is immutable configuration: build it once at process
//! start and pass it explicitly to the calculator. Tests can substitute their
//! own tables through the builder methods.

use std::collections::{BTreeMap, BTreeSet};

/// Medication dosing tables: per-kg factors, the loading-dose set, and
/// per-medication advisory strings.
#[derive(Debug, Clone, Default)]
pub struct Formulary {
    factors: BTreeMap<String, f64>,
    loading_dose: BTreeSet<String>,
    advisories: BTreeMap<String, String>,
}

/// Standard dosing factors (mg/kg).
const STANDARD_FACTORS: &[(&str, f64)] = &[
    ("epinephrine", 0.01),   // Anaphylaxis
    ("amiodarone", 5.00),    // Cardiac arrest
    ("lorazepam", 0.05),     // Seizures
    ("fentanyl", 0.001),     // Pain
    ("lisinopril", 0.5),     // ACE inhibitor for blood pressure
    ("metformin", 10.0),     // Diabetes medication
    ("oseltamivir", 2.5),    // Antiviral for influenza
    ("sumatriptan", 1.0),    // Migraine medication
    ("albuterol", 0.1),      // Asthma medication
    ("ibuprofen", 5.0),      // Pain/inflammation
    ("sertraline", 1.5),     // Antidepressant
    ("levothyroxine", 0.02), // Thyroid medication
];

/// Medications that double the base dosage on first administration.
const STANDARD_LOADING_DOSE: &[&str] = &["amiodarone", "lorazepam", "fentanyl"];

/// Advisory strings keyed by exact medication name.
const STANDARD_ADVISORIES: &[(&str, &str)] = &[
    ("epinephrine", "Monitor for arrhythmias"),
    ("amiodarone", "Monitor for hypotension"),
    ("fentanyl", "Monitor for respiratory depression"),
];

impl Formulary {
    /// The standard emergency-protocol formulary.
    #[must_use]
    pub fn standard() -> Self {
        let mut formulary = Self::default();
        for (medication, factor) in STANDARD_FACTORS {
            formulary = formulary.with_factor(*medication, *factor);
        }
        for medication in STANDARD_LOADING_DOSE {
            formulary = formulary.with_loading_dose(*medication);
        }
        for (medication, advisory) in STANDARD_ADVISORIES {
            formulary = formulary.with_advisory(*medication, *advisory);
        }
        formulary
    }

    /// Add or replace a dosing factor (mg/kg).
    #[must_use]
    pub fn with_factor(mut self, medication: impl Into<String>, factor: f64) -> Self {
        self.factors.insert(medication.into(), factor);
        self
    }

    /// Mark a medication as requiring a loading dose on first administration.
    #[must_use]
    pub fn with_loading_dose(mut self, medication: impl Into<String>) -> Self {
        self.loading_dose.insert(medication.into());
        self
    }

    /// Attach an advisory string to a medication.
    #[must_use]
    pub fn with_advisory(
        mut self,
        medication: impl Into<String>,
        advisory: impl Into<String>,
    ) -> Self {
        self.advisories.insert(medication.into(), advisory.into());
        self
    }

    /// Dosing factor for a medication, `0.0` when unknown.
    ///
    /// The zero default is deliberate: an unknown medication yields a zero
    /// dosage rather than an error.
    #[must_use]
    pub fn factor(&self, medication: &str) -> f64 {
        self.factors.get(medication).copied().unwrap_or(0.0)
    }

    /// Whether the medication doubles its base dosage on first administration.
    #[must_use]
    pub fn uses_loading_dose(&self, medication: &str) -> bool {
        self.loading_dose.contains(medication)
    }

    /// Advisory string for a medication, if any.
    #[must_use]
    pub fn advisory(&self, medication: &str) -> Option<&str> {
        self.advisories.get(medication).map(String::as_str)
    }

    /// All known medications with their factors, in name order.
    pub fn medications(&self) -> impl Iterator<Item = (&str, f64)> {
        self.factors
            .iter()
            .map(|(medication, factor)| (medication.as_str(), *factor))
    }
}
