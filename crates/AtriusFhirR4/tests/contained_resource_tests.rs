use atrius_fhir_r4::json;
use atrius_fhir_r4::r4::{
    Bundle, Device, Observation, Organization, Parameters, Patient, Resource, ResourceRegistry,
    UnknownResourcePolicy,
};
use atrius_fhir_r4::{FhirError, FhirJson};
use serde_json::json;

const OBSERVATION_WITH_CONTAINED: &str = r##"{
  "resourceType": "Observation",
  "id": "obs-1",
  "contained": [
    {
      "resourceType": "Patient",
      "id": "p1",
      "name": [{"family": "Chalmers", "given": ["Peter"]}]
    },
    {
      "id": "dev1",
      "resourceType": "Device",
      "manufacturer": "Acme"
    },
    {
      "resourceType": "Organization",
      "id": "org1",
      "name": "Acme Labs"
    }
  ],
  "status": "final",
  "code": {"text": "Body weight"},
  "subject": {"reference": "#p1"},
  "device": {"reference": "#dev1"},
  "performer": [{"reference": "#org1"}],
  "valueQuantity": {"value": 85.5, "unit": "kg"}
}"##;

#[test]
fn test_contained_dispatch_on_resource_type() {
    let observation: Observation = json::from_str(OBSERVATION_WITH_CONTAINED).unwrap();
    assert_eq!(observation.contained.len(), 3);

    let Resource::Patient(patient) = &observation.contained[0] else {
        panic!("expected a Patient, got {}", observation.contained[0].resource_type());
    };
    assert_eq!(patient.name[0].family.as_ref().unwrap().value.as_deref(), Some("Chalmers"));

    // resourceType may follow other keys.
    let Resource::Device(device) = &observation.contained[1] else {
        panic!("expected a Device");
    };
    assert_eq!(device.manufacturer.as_ref().unwrap().value.as_deref(), Some("Acme"));

    assert!(matches!(&observation.contained[2], Resource::Organization(_)));
    assert_eq!(observation.contained[2].id(), Some("org1"));
}

#[test]
fn test_contained_resources_encode_resource_type_first() {
    let observation: Observation = json::from_str(OBSERVATION_WITH_CONTAINED).unwrap();
    let encoded = observation.to_json().unwrap();

    let first_key = |value: &serde_json::Value| value.as_object().unwrap().keys().next().cloned();
    assert_eq!(first_key(&encoded).as_deref(), Some("resourceType"));
    for contained in encoded["contained"].as_array().unwrap() {
        assert_eq!(first_key(contained).as_deref(), Some("resourceType"));
    }
    assert_eq!(encoded["contained"][1]["resourceType"], json!("Device"));
}

#[test]
fn test_unknown_contained_type_is_rejected() {
    let err = json::from_value::<Observation>(json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "x"},
        "contained": [{"resourceType": "MadeUpThing", "id": "m1"}]
    }))
    .unwrap_err();

    assert!(matches!(
        err.root_cause(),
        FhirError::UnknownResourceType(name) if name == "MadeUpThing"
    ));
    assert_eq!(err.path(), Some("Observation.contained[0]"));
}

#[test]
fn test_missing_resource_type() {
    let err = json::from_value::<Resource>(json!({"id": "x"})).unwrap_err();
    assert!(matches!(err, FhirError::MissingResourceType));

    let err = json::from_value::<Patient>(json!({"id": "x"})).unwrap_err();
    assert!(matches!(err, FhirError::MissingResourceType));
}

#[test]
fn test_concrete_type_rejects_other_resource_type() {
    let err = json::from_value::<Patient>(json!({"resourceType": "Device"})).unwrap_err();
    assert!(matches!(
        err,
        FhirError::ResourceTypeMismatch { expected: "Patient", ref found } if found == "Device"
    ));
}

#[test]
fn test_any_resource_decodes_every_catalogued_type() {
    for resource_type in ResourceRegistry::global().resource_types() {
        let resource: Resource =
            json::from_value(json!({"resourceType": resource_type, "id": "r1"})).unwrap();
        assert_eq!(resource.resource_type(), resource_type);
        assert_eq!(resource.id(), Some("r1"));
    }
}

#[test]
fn test_bundle_entries_hold_any_resource() {
    let bundle: Bundle = json::from_value(json!({
        "resourceType": "Bundle",
        "type": "collection",
        "total": 2,
        "entry": [
            {"fullUrl": "urn:uuid:1", "resource": {"resourceType": "Patient", "active": true}},
            {
                "fullUrl": "urn:uuid:2",
                "resource": {
                    "resourceType": "Bundle",
                    "type": "collection",
                    "entry": [{"resource": {"resourceType": "Device"}}]
                }
            }
        ]
    }))
    .unwrap();

    assert_eq!(bundle.r#type.value.as_deref(), Some("collection"));
    assert_eq!(bundle.total.as_ref().and_then(|total| total.value), Some(2));
    let Some(Resource::Bundle(inner)) = &bundle.entry[1].resource else {
        panic!("expected a nested Bundle");
    };
    assert!(matches!(inner.entry[0].resource, Some(Resource::Device(_))));
}

#[test]
fn test_parameters_with_resource_and_parts() {
    let parameters: Parameters = json::from_value(json!({
        "resourceType": "Parameters",
        "parameter": [
            {"name": "count", "valueInteger": 3},
            {"name": "subject", "resource": {"resourceType": "Patient", "id": "p9"}},
            {"name": "match", "part": [
                {"name": "score", "valueDecimal": 0.95},
                {"name": "code", "valueCode": "certain"}
            ]}
        ]
    }))
    .unwrap();

    assert_eq!(parameters.parameter.len(), 3);
    assert_eq!(
        parameters.parameter[1].resource.as_ref().and_then(Resource::id),
        Some("p9")
    );
    assert_eq!(parameters.parameter[2].part.len(), 2);

    let encoded = parameters.to_json().unwrap();
    assert_eq!(encoded["parameter"][2]["part"][0]["valueDecimal"], json!(0.95));
    assert_eq!(encoded["parameter"][1]["resource"]["resourceType"], json!("Patient"));
}

#[test]
fn test_local_registry_preserve_policy() {
    let registry = ResourceRegistry::r4().with_unknown_policy(UnknownResourcePolicy::Preserve);
    let resource = registry
        .decode(json!({"resourceType": "MadeUpThing", "id": "m1", "payload": {"a": [1, 2]}}))
        .unwrap();

    let Resource::Opaque(opaque) = &resource else {
        panic!("expected an opaque resource");
    };
    assert_eq!(opaque.resource_type, "MadeUpThing");
    assert_eq!(resource.id(), Some("m1"));
    assert_eq!(
        resource.to_json().unwrap(),
        json!({"resourceType": "MadeUpThing", "id": "m1", "payload": {"a": [1, 2]}})
    );

    // Known types still decode to their concrete variant.
    let patient = registry.decode(json!({"resourceType": "Patient"})).unwrap();
    assert!(matches!(patient, Resource::Patient(_)));
}

#[test]
fn test_resource_from_concrete_type() {
    let resource = Resource::from(Device {
        id: Some("d1".into()),
        ..Default::default()
    });
    assert_eq!(resource.resource_type(), "Device");
    assert_eq!(resource.to_json().unwrap(), json!({"resourceType": "Device", "id": "d1"}));

    let organization: Resource = Organization::default().into();
    assert_eq!(organization.resource_type(), "Organization");
}
