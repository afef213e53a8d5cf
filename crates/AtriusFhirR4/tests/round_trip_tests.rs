use atrius_fhir_r4::json;
use atrius_fhir_r4::r4::{
    Condition, Observation, Patient, Procedure, Resource, Specimen, SpecimenCollectionCollected,
    SpecimenCollectionFastingStatus, SpecimenContainerAdditive,
};
use atrius_fhir_r4::{FhirJson, FhirResource};
use serde_json::{Value, json};

/// Decodes `input`, re-encodes it, and checks both the JSON and a second decode.
fn assert_round_trip<T>(input: Value)
where
    T: FhirResource + PartialEq + std::fmt::Debug,
{
    let decoded: T = json::from_value(input.clone()).unwrap();
    let encoded = decoded.to_json().unwrap();
    assert_eq!(encoded, input, "re-encoded {} differs", T::RESOURCE_TYPE);

    let decoded_again: T = json::from_value(encoded).unwrap();
    assert_eq!(decoded_again, decoded);
}

#[test]
fn test_patient_round_trip() {
    assert_round_trip::<Patient>(json!({
        "resourceType": "Patient",
        "id": "example",
        "_id": {"extension": [{"url": "http://example.org/id-note", "valueString": "legacy"}]},
        "meta": {"versionId": "3", "lastUpdated": "2023-05-01T10:00:00.123Z", "profile": ["http://example.org/p"]},
        "text": {"status": "generated", "div": "<div xmlns=\"http://www.w3.org/1999/xhtml\">Peter</div>"},
        "extension": [{"url": "http://example.org/ext", "valueCodeableConcept": {"text": "x"}}],
        "identifier": [{
            "use": "usual",
            "system": "urn:oid:1.2.36.146.595.217.0.1",
            "value": "12345",
            "assigner": {"display": "Acme Healthcare"}
        }],
        "active": true,
        "name": [{"use": "official", "family": "Chalmers", "given": ["Peter", "James"], "_given": [null, {"id": "g2"}]}],
        "telecom": [{"system": "phone", "value": "(03) 5555 6473", "use": "work", "rank": 1}],
        "gender": "male",
        "birthDate": "1974-12-25",
        "deceasedBoolean": false,
        "address": [{"line": ["534 Erewhon St"], "city": "PleasantVille", "postalCode": "3999"}],
        "multipleBirthInteger": 2,
        "contact": [{"relationship": [{"coding": [{"system": "http://terminology.hl7.org/CodeSystem/v2-0131", "code": "N"}]}], "gender": "female"}],
        "communication": [{"language": {"text": "English"}, "preferred": true}],
        "managingOrganization": {"reference": "Organization/1"},
        "link": [{"other": {"reference": "Patient/pat2"}, "type": "seealso"}]
    }));
}

#[test]
fn test_observation_round_trip() {
    assert_round_trip::<Observation>(json!({
        "resourceType": "Observation",
        "id": "bp",
        "status": "final",
        "category": [{"coding": [{"system": "http://terminology.hl7.org/CodeSystem/observation-category", "code": "vital-signs"}]}],
        "code": {"coding": [{"system": "http://loinc.org", "code": "85354-9"}], "text": "Blood pressure"},
        "subject": {"reference": "Patient/example"},
        "effectiveTiming": {
            "event": ["2012-09-17"],
            "repeat": {"boundsDuration": {"value": 10, "unit": "d"}, "frequency": 2, "period": 1.0, "periodUnit": "d", "timeOfDay": ["08:00:00"]}
        },
        "issued": "2012-09-17T09:30:47.000+01:00",
        "note": [{"authorString": "Dr. Adams", "text": "Measured twice"}],
        "referenceRange": [{"low": {"value": 60}, "high": {"value": 90.50}, "text": "normal"}],
        "component": [
            {"code": {"text": "Systolic"}, "valueQuantity": {"value": 107, "unit": "mmHg", "system": "http://unitsofmeasure.org", "code": "mm[Hg]"}},
            {"code": {"text": "Diastolic"}, "valueRatio": {"numerator": {"value": 1}, "denominator": {"value": 3.000}}},
            {"code": {"text": "Position"}, "valueCodeableConcept": {"text": "sitting"}, "interpretation": [{"text": "N"}]}
        ]
    }));
}

#[test]
fn test_condition_and_procedure_round_trip() {
    assert_round_trip::<Condition>(json!({
        "resourceType": "Condition",
        "clinicalStatus": {"coding": [{"code": "active"}]},
        "code": {"text": "Asthma"},
        "subject": {"reference": "Patient/example"},
        "onsetAge": {"value": 12, "unit": "a"},
        "abatementString": "around April",
        "recordedDate": "2013-04",
        "stage": [{"summary": {"text": "mild"}, "assessment": [{"reference": "ClinicalImpression/1"}]}],
        "evidence": [{"code": [{"text": "wheeze"}]}]
    }));

    assert_round_trip::<Procedure>(json!({
        "resourceType": "Procedure",
        "instantiatesUri": ["http://example.org/protocol", null],
        "_instantiatesUri": [null, {"extension": [{"url": "http://example.org/why-missing", "valueCode": "unknown"}]}],
        "status": "completed",
        "subject": {"reference": "Patient/example"},
        "performedPeriod": {"start": "2013-01-28T13:31:00+01:00", "end": "2013-01-28T14:27:00+01:00"},
        "performer": [{"actor": {"display": "Dr Cecil"}}],
        "focalDevice": [{"action": {"text": "implanted"}, "manipulated": {"reference": "Device/1"}}]
    }));
}

#[test]
fn test_specimen_choice_fields_round_trip() {
    let input = json!({
        "resourceType": "Specimen",
        "status": "available",
        "collection": {
            "collector": {"reference": "Practitioner/f202"},
            "collectedDateTime": "2011-05-30T06:15:00Z",
            "quantity": {"value": 6, "unit": "mL"},
            "fastingStatusDuration": {"value": 12, "unit": "h"}
        },
        "processing": [{"description": "Acidify", "timeDateTime": "2015-08-18T08:10:00Z"}],
        "container": [{"capacity": {"value": 10, "unit": "mL"}, "additiveCodeableConcept": {"text": "EDTA"}}]
    });
    assert_round_trip::<Specimen>(input.clone());

    let specimen: Specimen = json::from_value(input).unwrap();
    let collection = specimen.collection.as_ref().unwrap();
    assert!(matches!(collection.collected, Some(SpecimenCollectionCollected::DateTime(_))));
    assert!(matches!(
        collection.fasting_status,
        Some(SpecimenCollectionFastingStatus::Duration(_))
    ));
    assert!(matches!(
        specimen.container[0].additive,
        Some(SpecimenContainerAdditive::CodeableConcept(_))
    ));
}

#[test]
fn test_empty_arrays_are_not_written() {
    let patient: Patient = json::from_value(json!({
        "resourceType": "Patient",
        "name": [],
        "identifier": [{}],
        "telecom": null
    }))
    .unwrap();
    assert!(patient.name.is_empty());
    assert_eq!(patient, Patient::default());
    assert_eq!(patient.to_json().unwrap(), json!({"resourceType": "Patient"}));
}

#[test]
fn test_empty_items_in_composite_arrays_are_dropped() {
    let patient: Patient = json::from_value(json!({
        "resourceType": "Patient",
        "identifier": [{}, {"value": "12345"}, null, {"assigner": {}}],
        "meta": {}
    }))
    .unwrap();
    assert_eq!(patient.identifier.len(), 1);
    assert_eq!(
        patient.identifier[0].value.as_ref().and_then(|v| v.value.as_deref()),
        Some("12345")
    );
    assert_eq!(patient.meta, None);

    let encoded = patient.to_json().unwrap();
    assert_eq!(
        encoded,
        json!({"resourceType": "Patient", "identifier": [{"value": "12345"}]})
    );
    let again: Patient = json::from_value(encoded).unwrap();
    assert_eq!(again, patient);
}

#[test]
fn test_serde_interop_matches_codec() {
    let input = json!({
        "resourceType": "Patient",
        "active": true,
        "_active": {"id": "a"},
        "deceasedDateTime": "2015-02-14T13:42:00+10:00"
    });
    let via_serde: Patient = serde_json::from_value(input.clone()).unwrap();
    let via_codec: Patient = json::from_value(input.clone()).unwrap();
    assert_eq!(via_serde, via_codec);
    assert_eq!(serde_json::to_value(&via_serde).unwrap(), input);

    let resource: Resource = serde_json::from_value(input.clone()).unwrap();
    assert_eq!(serde_json::to_value(&resource).unwrap(), input);
}

#[test]
fn test_unknown_properties_are_ignored() {
    let patient: Patient = json::from_value(json!({
        "resourceType": "Patient",
        "active": true,
        "notAFhirElement": {"anything": 1}
    }))
    .unwrap();
    assert_eq!(
        patient.to_json().unwrap(),
        json!({"resourceType": "Patient", "active": true})
    );
}
