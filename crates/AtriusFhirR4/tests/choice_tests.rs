use atrius_fhir_r4::json;
use atrius_fhir_r4::r4::{
    Observation, ObservationComponentValue, ObservationEffective, ObservationValue, Patient,
    PatientDeceased, Period, Quantity,
};
use atrius_fhir_r4::{FhirChoice, FhirError, FhirJson, PreciseDecimal, PrecisionDateTime};
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn test_effective_date_time_with_shadow() {
    let observation: Observation = json::from_value(json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "Heart rate"},
        "effectiveDateTime": "2020-01-01",
        "_effectiveDateTime": {"id": "a1"}
    }))
    .unwrap();

    let Some(ObservationEffective::DateTime(effective)) = &observation.effective else {
        panic!("expected effectiveDateTime, got {:?}", observation.effective);
    };
    assert_eq!(
        effective.value,
        Some("2020-01-01".parse::<PrecisionDateTime>().unwrap())
    );
    assert_eq!(effective.id.as_deref(), Some("a1"));
    assert_eq!(
        observation.effective.as_ref().map(FhirChoice::key),
        Some("effectiveDateTime")
    );
}

#[test]
fn test_conflicting_choice_is_rejected() {
    let err = json::from_value::<Observation>(json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "Heart rate"},
        "effectiveDateTime": "2020-01-01",
        "effectivePeriod": {"start": "2020-01-01"}
    }))
    .unwrap_err();

    match err.root_cause() {
        FhirError::ConflictingChoice {
            type_name,
            field,
            keys,
        } => {
            assert_eq!(*type_name, "Observation");
            assert_eq!(*field, "effective");
            assert_eq!(keys, &["effectiveDateTime", "effectivePeriod"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("Observation.effective[x]"));
}

#[test]
fn test_shadow_only_sibling_conflicts_too() {
    let err = json::from_value::<Patient>(json!({
        "resourceType": "Patient",
        "deceasedBoolean": true,
        "_deceasedDateTime": {"id": "d1"}
    }))
    .unwrap_err();
    assert!(matches!(
        err.root_cause(),
        FhirError::ConflictingChoice { field: "deceased", .. }
    ));
}

#[test]
fn test_choice_encodes_only_active_key() {
    let observation = Observation {
        status: "final".into(),
        effective: Some(ObservationEffective::Period(Period {
            start: Some("2021-03-04".parse::<PrecisionDateTime>().unwrap().into()),
            ..Default::default()
        })),
        value: Some(ObservationValue::Quantity(Quantity {
            value: Some(PreciseDecimal::from(dec!(72)).into()),
            unit: Some("beats/minute".into()),
            ..Default::default()
        })),
        ..Default::default()
    };

    let encoded = observation.to_json().unwrap();
    let object = encoded.as_object().unwrap();
    assert_eq!(object["effectivePeriod"], json!({"start": "2021-03-04"}));
    assert_eq!(object["valueQuantity"], json!({"value": 72, "unit": "beats/minute"}));
    for absent in ["effectiveDateTime", "effectiveTiming", "effectiveInstant", "valueString"] {
        assert!(!object.contains_key(absent), "{absent} should not be written");
    }
}

#[test]
fn test_absent_choice_is_none() {
    let patient: Patient = json::from_value(json!({"resourceType": "Patient"})).unwrap();
    assert_eq!(patient.deceased, None);
    assert_eq!(patient.multiple_birth, None);
}

#[test]
fn test_empty_choice_shadow_is_absent() {
    let input = json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "x"},
        "_valueString": {"extension": []},
        "_effectiveDateTime": {}
    });
    let observation: Observation = json::from_value(input).unwrap();
    assert_eq!(observation.value, None);
    assert_eq!(observation.effective, None);

    let encoded = observation.to_json().unwrap();
    assert_eq!(
        encoded,
        json!({"resourceType": "Observation", "status": "final", "code": {"text": "x"}})
    );
    let again: Observation = json::from_value(encoded).unwrap();
    assert_eq!(again, observation);
}

#[test]
fn test_empty_composite_choice_is_absent() {
    let observation: Observation = json::from_value(json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "x"},
        "valueQuantity": {}
    }))
    .unwrap();
    assert_eq!(observation.value, None);
}

#[test]
fn test_primitive_choice_member_keeps_metadata() {
    let patient: Patient = json::from_value(json!({
        "resourceType": "Patient",
        "deceasedBoolean": false,
        "_deceasedBoolean": {"id": "dec"}
    }))
    .unwrap();
    let Some(PatientDeceased::Boolean(deceased)) = &patient.deceased else {
        panic!("expected deceasedBoolean");
    };
    assert_eq!(deceased.value, Some(false));
    assert_eq!(deceased.id.as_deref(), Some("dec"));

    let encoded = patient.to_json().unwrap();
    assert_eq!(encoded["deceasedBoolean"], json!(false));
    assert_eq!(encoded["_deceasedBoolean"], json!({"id": "dec"}));
}

#[test]
fn test_nested_choice_in_backbone_element() {
    let observation: Observation = json::from_value(json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "Blood pressure"},
        "component": [
            {"code": {"text": "Systolic"}, "valueQuantity": {"value": 120, "unit": "mmHg"}},
            {"code": {"text": "Comment"}, "valueString": "taken standing"}
        ]
    }))
    .unwrap();

    let Some(ObservationComponentValue::Quantity(systolic)) = &observation.component[0].value
    else {
        panic!("expected valueQuantity");
    };
    let systolic_value = systolic.value.as_ref().and_then(|value| value.value.as_ref());
    assert_eq!(systolic_value.and_then(PreciseDecimal::value), Some(dec!(120)));
    assert!(matches!(
        &observation.component[1].value,
        Some(ObservationComponentValue::String(text)) if text.value.as_deref() == Some("taken standing")
    ));
}

#[test]
fn test_choice_enum_serde_as_single_entry_object() {
    let value = ObservationValue::String("positive".into());
    let encoded = serde_json::to_value(&value).unwrap();
    assert_eq!(encoded, json!({"valueString": "positive"}));

    let decoded: ObservationValue = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, value);

    assert!(serde_json::from_value::<ObservationValue>(json!({})).is_err());
}

#[test]
fn test_choice_keys_are_declared_in_order() {
    assert_eq!(ObservationEffective::FIELD, "effective");
    assert_eq!(
        ObservationEffective::KEYS,
        &[
            "effectiveDateTime",
            "effectivePeriod",
            "effectiveTiming",
            "effectiveInstant"
        ]
    );
}
