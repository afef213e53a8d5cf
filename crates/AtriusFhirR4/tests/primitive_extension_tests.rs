use atrius_fhir_r4::json;
use atrius_fhir_r4::r4::{Boolean, Extension, ExtensionValue, HumanName, Patient};
use atrius_fhir_r4::{FhirJson, PrecisionDate, PrecisionDateTime};
use serde_json::json;

const BIRTH_TIME_URL: &str = "http://hl7.org/fhir/StructureDefinition/patient-birthTime";

fn birth_time_extension() -> Extension {
    Extension {
        url: BIRTH_TIME_URL.to_string(),
        value: Some(ExtensionValue::DateTime(
            "1974-12-25T14:35:45-05:00"
                .parse::<PrecisionDateTime>()
                .map(Into::into)
                .unwrap(),
        )),
        ..Default::default()
    }
}

#[test]
fn test_value_and_shadow_are_merged() {
    let patient: Patient = json::from_value(json!({
        "resourceType": "Patient",
        "birthDate": "1974-12-25",
        "_birthDate": {
            "id": "bd1",
            "extension": [{
                "url": BIRTH_TIME_URL,
                "valueDateTime": "1974-12-25T14:35:45-05:00"
            }]
        }
    }))
    .unwrap();

    let birth_date = patient.birth_date.unwrap();
    assert_eq!(birth_date.value, Some(PrecisionDate::from_ymd(1974, 12, 25)));
    assert_eq!(birth_date.id.as_deref(), Some("bd1"));
    assert_eq!(birth_date.extension, vec![birth_time_extension()]);
}

#[test]
fn test_metadata_only_primitive() {
    let patient: Patient = json::from_value(json!({
        "resourceType": "Patient",
        "_birthDate": {"extension": [{"url": BIRTH_TIME_URL, "valueDateTime": "1974-12-25T14:35:45-05:00"}]}
    }))
    .unwrap();

    let birth_date = patient.birth_date.as_ref().unwrap();
    assert_eq!(birth_date.value, None);
    assert_eq!(birth_date.extension.len(), 1);

    // Only the shadow is written back.
    let encoded = patient.to_json().unwrap();
    assert!(encoded.get("birthDate").is_none());
    assert_eq!(
        encoded["_birthDate"]["extension"][0]["valueDateTime"],
        json!("1974-12-25T14:35:45-05:00")
    );
}

#[test]
fn test_null_slots_count_as_absent() {
    let patient: Patient = json::from_value(json!({
        "resourceType": "Patient",
        "active": null,
        "_active": null
    }))
    .unwrap();
    assert!(patient.active.is_none());
}

#[test]
fn test_empty_primitive_is_not_written() {
    let patient = Patient {
        active: Some(Default::default()),
        ..Default::default()
    };
    assert_eq!(patient.to_json().unwrap(), json!({"resourceType": "Patient"}));
}

#[test]
fn test_shadow_array_alignment() {
    let name: HumanName = json::from_value(json!({
        "given": ["Peter", null, "James"],
        "_given": [null, {"id": "g2"}, null]
    }))
    .unwrap();

    assert_eq!(name.given.len(), 3);
    assert_eq!(name.given[0].value.as_deref(), Some("Peter"));
    assert_eq!(name.given[1].value, None);
    assert_eq!(name.given[1].id.as_deref(), Some("g2"));
    assert_eq!(name.given[2].value.as_deref(), Some("James"));

    assert_eq!(
        name.to_json().unwrap(),
        json!({
            "given": ["Peter", null, "James"],
            "_given": [null, {"id": "g2"}, null]
        })
    );
}

#[test]
fn test_shadow_array_longer_than_values() {
    let name: HumanName = json::from_value(json!({
        "given": ["Peter"],
        "_given": [null, {"id": "g2"}]
    }))
    .unwrap();

    assert_eq!(name.given.len(), 2);
    assert_eq!(name.given[1].id.as_deref(), Some("g2"));

    // Re-encoding pads the value array to the full length.
    assert_eq!(
        name.to_json().unwrap(),
        json!({
            "given": ["Peter", null],
            "_given": [null, {"id": "g2"}]
        })
    );
}

#[test]
fn test_metadata_only_repeated_primitive() {
    let name: HumanName = json::from_value(json!({
        "_given": [{"id": "g1"}, {"id": "g2"}]
    }))
    .unwrap();

    assert_eq!(name.given.len(), 2);
    assert!(name.given.iter().all(|given| given.value.is_none()));

    // No element has a value, so no value array is written.
    assert_eq!(
        name.to_json().unwrap(),
        json!({"_given": [{"id": "g1"}, {"id": "g2"}]})
    );
}

#[test]
fn test_values_without_metadata_have_no_shadow_array() {
    let name = HumanName {
        family: Some("Chalmers".into()),
        given: vec!["Peter".into(), "James".into()],
        ..Default::default()
    };
    assert_eq!(
        name.to_json().unwrap(),
        json!({"family": "Chalmers", "given": ["Peter", "James"]})
    );
}

#[test]
fn test_empty_shadow_decodes_as_absent() {
    let input = json!({
        "resourceType": "Patient",
        "_active": {},
        "_gender": {"extension": []},
        "_birthDate": {"extension": [{}]}
    });
    let patient: Patient = json::from_value(input).unwrap();
    assert_eq!(patient.active, None);
    assert_eq!(patient.gender, None);
    assert_eq!(patient.birth_date, None);

    let encoded = patient.to_json().unwrap();
    assert_eq!(encoded, json!({"resourceType": "Patient"}));
    let again: Patient = json::from_value(encoded).unwrap();
    assert_eq!(again, patient);
}

#[test]
fn test_blank_extensions_are_not_written() {
    let patient = Patient {
        active: Some(Boolean {
            extension: vec![Extension::default()],
            ..Boolean::from(true)
        }),
        name: vec![HumanName {
            given: vec![
                atrius_fhir_r4::r4::String {
                    extension: vec![Extension::default()],
                    .."Peter".into()
                },
                "James".into(),
            ],
            ..Default::default()
        }],
        ..Default::default()
    };

    assert_eq!(
        patient.to_json().unwrap(),
        json!({
            "resourceType": "Patient",
            "active": true,
            "name": [{"given": ["Peter", "James"]}]
        })
    );
}
