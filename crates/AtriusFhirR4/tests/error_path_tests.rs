use atrius_fhir_r4::json;
use atrius_fhir_r4::r4::{Bundle, Observation, Patient};
use atrius_fhir_r4::FhirError;
use serde_json::json;

#[test]
fn test_error_path_names_the_element_chain() {
    let err = json::from_value::<Observation>(json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "Blood pressure"},
        "component": [
            {"code": {"text": "Systolic"}, "valueQuantity": {"value": 120}},
            {"code": {"text": "Diastolic"}, "valueQuantity": {"value": "eighty"}}
        ]
    }))
    .unwrap_err();

    assert_eq!(err.path(), Some("Observation.component[1].valueQuantity.value"));
    assert!(matches!(
        err.root_cause(),
        FhirError::InvalidType { expected: "number", found: "string" }
    ));
    assert_eq!(
        err.to_string(),
        "Observation.component[1].valueQuantity.value: expected number, found string"
    );
}

#[test]
fn test_error_path_inside_shadow_array() {
    let err = json::from_value::<Patient>(json!({
        "resourceType": "Patient",
        "name": [{"given": ["Peter"], "_given": [{"id": 7}]}]
    }))
    .unwrap_err();
    assert_eq!(err.path(), Some("Patient.name[0]._given[0].id"));
}

#[test]
fn test_error_path_through_contained_resource() {
    let err = json::from_value::<Observation>(json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "x"},
        "contained": [
            {"resourceType": "Patient", "birthDate": "1974-13-01"}
        ]
    }))
    .unwrap_err();

    assert_eq!(err.path(), Some("Observation.contained[0].birthDate"));
    assert!(matches!(
        err.root_cause(),
        FhirError::InvalidValue { kind: "date", value } if value == "1974-13-01"
    ));
}

#[test]
fn test_error_path_through_bundle_entry() {
    let err = json::from_value::<Bundle>(json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [
            {"resource": {"resourceType": "Patient"}},
            {"resource": {"resourceType": "Patient", "active": "yes"}}
        ]
    }))
    .unwrap_err();
    assert_eq!(err.path(), Some("Bundle.entry[1].resource.active"));
}

#[test]
fn test_wrong_json_kinds() {
    let err = json::from_value::<Patient>(json!({"resourceType": "Patient", "name": {"family": "x"}}))
        .unwrap_err();
    assert_eq!(err.path(), Some("Patient.name"));
    assert!(matches!(err.root_cause(), FhirError::InvalidType { expected: "array", .. }));

    let err = json::from_value::<Patient>(json!(["not", "an", "object"])).unwrap_err();
    assert!(matches!(err, FhirError::InvalidType { expected: "object", found: "array" }));

    let err = json::from_value::<Patient>(json!({"resourceType": "Patient", "multipleBirthInteger": 1.5}))
        .unwrap_err();
    assert!(matches!(
        err.root_cause(),
        FhirError::InvalidValue { kind: "integer", .. }
    ));
}

#[test]
fn test_malformed_json_text() {
    let err = json::from_str::<Patient>(r#"{"resourceType": "Patient",""#).unwrap_err();
    assert!(matches!(err, FhirError::Json(_)));
    assert_eq!(err.path(), None);
}

#[test]
fn test_serde_errors_carry_the_message() {
    let err = serde_json::from_value::<Observation>(json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "x"},
        "valueString": "a",
        "valueBoolean": true
    }))
    .unwrap_err();
    assert!(
        err.to_string()
            .contains("conflicting values for Observation.value[x]: valueString, valueBoolean"),
        "unexpected message: {err}"
    );
}
