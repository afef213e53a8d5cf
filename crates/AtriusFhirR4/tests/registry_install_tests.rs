//! Installs a process-wide registry, so it lives in its own test binary.

use atrius_fhir_r4::json;
use atrius_fhir_r4::r4::{Observation, Resource, ResourceRegistry, UnknownResourcePolicy};
use atrius_fhir_r4::FhirJson;
use serde_json::json;

#[test]
fn test_installed_registry_preserves_unknown_contained_resources() {
    let installed = ResourceRegistry::r4()
        .with_unknown_policy(UnknownResourcePolicy::Preserve)
        .install()
        .expect("no registry should be active before this test");
    assert_eq!(installed.unknown_policy(), UnknownResourcePolicy::Preserve);
    assert!(std::ptr::eq(installed, ResourceRegistry::global()));

    // A second install is refused and hands the registry back.
    let rejected = ResourceRegistry::empty().install().unwrap_err();
    assert!(rejected.resource_types().is_empty());
    assert_eq!(
        ResourceRegistry::global().unknown_policy(),
        UnknownResourcePolicy::Preserve
    );

    let input = json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "x"},
        "contained": [
            {"resourceType": "Patient", "id": "p1"},
            {"resourceType": "FutureResource", "id": "f1", "novel": {"nested": true}}
        ]
    });
    let observation: Observation = json::from_value(input.clone()).unwrap();

    assert!(matches!(observation.contained[0], Resource::Patient(_)));
    let Resource::Opaque(opaque) = &observation.contained[1] else {
        panic!("expected the unknown type to be preserved");
    };
    assert_eq!(opaque.resource_type, "FutureResource");
    assert_eq!(opaque.content["novel"], json!({"nested": true}));

    assert_eq!(observation.to_json().unwrap(), input);
}
