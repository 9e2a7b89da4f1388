//! Patient record normalization.
//!
//! Cleaning rules, applied per record in input order:
//! 1. Title-case the name (missing or non-text name rejects the record).
//! 2. Coerce the age to an integer; anything that is not a valid
//!    non-negative integer representation becomes 0.
//! 3. Keep only patients aged 18 or over. The boundary is inclusive:
//!    exactly 18 stays in.
//! 4. Drop structural duplicates (all four fields equal after
//!    normalization); the first occurrence wins.
//!
//! `gender` and `diagnosis` pass through unchanged; absence substitutes an
//! empty string.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::{debug, warn};

use triage_model::{CleanedPatient, RawPatient, Rejection, TriageError};

/// Minimum retained age. The filter is inclusive: `age >= ADULT_AGE` stays.
pub const ADULT_AGE: u32 = 18;

/// Outcome of normalizing one input batch.
#[derive(Debug, Default)]
pub struct PatientBatch {
    /// Cleaned records, input order preserved, no duplicates, all `age >= 18`.
    pub patients: Vec<CleanedPatient>,
    /// Records rejected for a missing or non-text name.
    pub rejections: Vec<Rejection>,
}

/// Normalize, filter, and deduplicate a batch of raw patient records.
///
/// Idempotent: feeding the output back through produces the same records.
pub fn normalize_patients(records: &[RawPatient]) -> PatientBatch {
    let mut batch = PatientBatch::default();
    let mut seen = BTreeSet::new();
    for (index, record) in records.iter().enumerate() {
        let name = match normalized_name(record) {
            Ok(name) => name,
            Err(error) => {
                warn!(record = index, %error, "patient record rejected");
                batch.rejections.push(Rejection { index, error });
                continue;
            }
        };
        let age = coerce_age(record.age.as_ref());
        if age < ADULT_AGE {
            debug!(record = index, age, "patient filtered: under minimum age");
            continue;
        }
        let patient = CleanedPatient {
            name,
            age,
            gender: record.gender.clone().unwrap_or_default(),
            diagnosis: record.diagnosis.clone().unwrap_or_default(),
        };
        if seen.insert(dedupe_key(&patient)) {
            batch.patients.push(patient);
        } else {
            debug!(record = index, "patient dropped: duplicate record");
        }
    }
    batch
}

fn normalized_name(record: &RawPatient) -> Result<String, TriageError> {
    match record.name.as_ref() {
        Some(Value::String(name)) => Ok(title_case(name)),
        Some(_) => Err(TriageError::field("name", "is not text")),
        None => Err(TriageError::field("name", "is missing")),
    }
}

/// Title-case every whitespace-separated word: first letter uppercased,
/// the rest lowercased.
#[must_use]
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Coerce a raw age value to a non-negative integer.
///
/// Invalid representations (missing, non-integer text, fractional or
/// negative numbers) coerce to 0 rather than failing the record; the age
/// filter then drops them.
fn coerce_age(age: Option<&Value>) -> u32 {
    match age {
        Some(Value::Number(number)) => number
            .as_u64()
            .and_then(|age| u32::try_from(age).ok())
            .unwrap_or(0),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

// A tuple of the four fields: field contents stay separate, so no two
// structurally-distinct patients can ever share a key.
fn dedupe_key(patient: &CleanedPatient) -> (String, u32, String, String) {
    (
        patient.name.clone(),
        patient.age,
        patient.gender.clone(),
        patient.diagnosis.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, age: &str, gender: &str, diagnosis: &str) -> RawPatient {
        RawPatient {
            name: Some(Value::String(name.to_string())),
            age: Some(Value::String(age.to_string())),
            gender: Some(gender.to_string()),
            diagnosis: Some(diagnosis.to_string()),
        }
    }

    #[test]
    fn cleans_the_documented_example() {
        let batch = normalize_patients(&[raw("john smith", "32", "male", "flu")]);
        assert_eq!(
            batch.patients,
            vec![CleanedPatient {
                name: "John Smith".to_string(),
                age: 32,
                gender: "male".to_string(),
                diagnosis: "flu".to_string(),
            }]
        );
        assert!(batch.rejections.is_empty());
    }

    #[test]
    fn title_cases_mixed_input() {
        assert_eq!(title_case("john smith"), "John Smith");
        assert_eq!(title_case("MARY ANN o'neil"), "Mary Ann O'neil");
        assert_eq!(title_case("  spaced   out  "), "Spaced Out");
        assert_eq!(title_case(""), "");
    }

    // The age boundary has been inverted more than once in prior versions
    // of this logic. 17 is out, 18 is in.
    #[test]
    fn age_seventeen_is_filtered() {
        let batch = normalize_patients(&[raw("a b", "17", "female", "asthma")]);
        assert!(batch.patients.is_empty());
        assert!(batch.rejections.is_empty());
    }

    #[test]
    fn age_eighteen_is_retained() {
        let batch = normalize_patients(&[raw("a b", "18", "female", "asthma")]);
        assert_eq!(batch.patients.len(), 1);
        assert_eq!(batch.patients[0].age, 18);
    }

    #[test]
    fn invalid_ages_coerce_to_zero_and_filter_out() {
        let cases = [
            RawPatient {
                age: Some(Value::String("unknown".to_string())),
                ..raw("a b", "0", "", "")
            },
            RawPatient {
                age: Some(Value::from(17.5)),
                ..raw("a b", "0", "", "")
            },
            RawPatient {
                age: Some(Value::from(-3)),
                ..raw("a b", "0", "", "")
            },
            RawPatient {
                age: None,
                ..raw("a b", "0", "", "")
            },
        ];
        let batch = normalize_patients(&cases);
        assert!(batch.patients.is_empty());
        assert!(batch.rejections.is_empty());
    }

    #[test]
    fn numeric_age_is_accepted() {
        let record = RawPatient {
            age: Some(Value::from(44)),
            ..raw("c d", "0", "male", "flu")
        };
        let batch = normalize_patients(&[record]);
        assert_eq!(batch.patients[0].age, 44);
    }

    #[test]
    fn missing_name_rejects_the_record_only() {
        let records = [
            RawPatient {
                name: None,
                ..raw("", "40", "male", "flu")
            },
            raw("jane doe", "40", "female", "flu"),
        ];
        let batch = normalize_patients(&records);
        assert_eq!(batch.patients.len(), 1);
        assert_eq!(batch.patients[0].name, "Jane Doe");
        assert_eq!(batch.rejections.len(), 1);
        assert_eq!(batch.rejections[0].index, 0);
    }

    #[test]
    fn non_text_name_rejects_the_record() {
        let record = RawPatient {
            name: Some(Value::from(42)),
            ..raw("", "40", "male", "flu")
        };
        let batch = normalize_patients(&[record]);
        assert!(batch.patients.is_empty());
        assert_eq!(batch.rejections.len(), 1);
    }

    #[test]
    fn duplicates_are_dropped_first_wins() {
        let records = [
            raw("john smith", "32", "male", "flu"),
            raw("JOHN SMITH", "32", "male", "flu"),
            raw("john smith", "33", "male", "flu"),
        ];
        let batch = normalize_patients(&records);
        // Same name after title-casing and same age dedupe; different age stays.
        assert_eq!(batch.patients.len(), 2);
        assert_eq!(batch.patients[0].age, 32);
        assert_eq!(batch.patients[1].age, 33);
    }

    #[test]
    fn field_contents_never_bleed_across_the_dedupe_key() {
        // Distinct records whose concatenated fields read the same must
        // both survive; only whole-field equality counts as a duplicate.
        let records = [
            raw("a", "18", "g|x", "d"),
            raw("a", "18", "g", "x|d"),
        ];
        let batch = normalize_patients(&records);
        assert_eq!(batch.patients.len(), 2);
        assert_eq!(batch.patients[0].gender, "g|x");
        assert_eq!(batch.patients[1].diagnosis, "x|d");
    }

    #[test]
    fn missing_optional_fields_become_empty() {
        let record = RawPatient {
            name: Some(Value::String("a b".to_string())),
            age: Some(Value::String("21".to_string())),
            gender: None,
            diagnosis: None,
        };
        let batch = normalize_patients(&[record]);
        assert_eq!(batch.patients[0].gender, "");
        assert_eq!(batch.patients[0].diagnosis, "");
    }

    #[test]
    fn normalize_is_idempotent_on_its_own_output() {
        let records = [
            raw("john smith", "32", "male", "flu"),
            raw("john smith", "32", "male", "flu"),
            raw("mary jones", "18", "female", "asthma"),
            raw("too young", "17", "male", "flu"),
        ];
        let first = normalize_patients(&records);
        let as_raw: Vec<RawPatient> = first
            .patients
            .iter()
            .cloned()
            .map(RawPatient::from)
            .collect();
        let second = normalize_patients(&as_raw);
        assert_eq!(first.patients, second.patients);
        assert!(second.rejections.is_empty());
    }

    #[test]
    fn empty_input_is_a_valid_result() {
        let batch = normalize_patients(&[]);
        assert!(batch.patients.is_empty());
        assert!(batch.rejections.is_empty());
    }
}
