//! Property tests for the batch invariants.

use proptest::prelude::*;
use serde_json::Value;

use triage_model::{DosageRequest, Formulary, RawPatient};
use triage_transform::{compute_all, normalize_patients};

fn arb_age() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        (0u32..120).prop_map(|age| Some(Value::from(age))),
        (0u32..120).prop_map(|age| Some(Value::String(age.to_string()))),
        "[a-z]{0,6}".prop_map(|text| Some(Value::String(text))),
    ]
}

fn arb_patient() -> impl Strategy<Value = RawPatient> {
    (
        proptest::option::of("[a-z ]{1,12}"),
        arb_age(),
        proptest::option::of("(male|female)"),
        proptest::option::of("[a-z]{1,8}"),
    )
        .prop_map(|(name, age, gender, diagnosis)| RawPatient {
            name: name.map(Value::String),
            age,
            gender,
            diagnosis,
        })
}

fn arb_request() -> impl Strategy<Value = DosageRequest> {
    (
        "[a-z ]{1,12}",
        proptest::option::of(1.0f64..200.0),
        proptest::option::of("(epinephrine|amiodarone|lorazepam|fentanyl|mystery)"),
        any::<bool>(),
    )
        .prop_map(|(name, weight, medication, is_first_dose)| DosageRequest {
            name,
            weight: weight.map(Value::from),
            medication,
            condition: None,
            is_first_dose,
            allergies: vec![],
        })
}

proptest! {
    #[test]
    fn no_minor_survives_normalization(records in proptest::collection::vec(arb_patient(), 0..24)) {
        let batch = normalize_patients(&records);
        prop_assert!(batch.patients.iter().all(|patient| patient.age >= 18));
    }

    #[test]
    fn no_structural_duplicates_in_output(records in proptest::collection::vec(arb_patient(), 0..24)) {
        let batch = normalize_patients(&records);
        for (i, a) in batch.patients.iter().enumerate() {
            for b in &batch.patients[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_record_is_kept_filtered_or_rejected(records in proptest::collection::vec(arb_patient(), 0..24)) {
        let batch = normalize_patients(&records);
        prop_assert!(batch.patients.len() + batch.rejections.len() <= records.len());
    }

    #[test]
    fn total_is_the_sum_of_final_dosages(requests in proptest::collection::vec(arb_request(), 0..24)) {
        let formulary = Formulary::standard();
        let batch = compute_all(&requests, &formulary);
        let sum: f64 = batch.results.iter().map(|result| result.final_dosage).sum();
        prop_assert!((batch.total - sum).abs() < 1e-9);
        prop_assert_eq!(batch.results.len() + batch.rejections.len(), requests.len());
    }

    #[test]
    fn final_dosage_only_ever_doubles_base(requests in proptest::collection::vec(arb_request(), 0..24)) {
        let formulary = Formulary::standard();
        let batch = compute_all(&requests, &formulary);
        for result in &batch.results {
            let expected = if result.loading_dose_applied {
                result.base_dosage * 2.0
            } else {
                result.base_dosage
            };
            prop_assert_eq!(result.final_dosage, expected);
        }
    }
}
