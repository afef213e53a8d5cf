use crate::FhirSerde;
use crate::r4::{Extension, Identifier, String, Uri};

/// FHIR Reference type
///
/// A reference from one resource to another.
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/Element
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Reference](http://hl7.org/fhir/StructureDefinition/Reference)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Reference {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Literal reference, Relative, internal or absolute URL
    ///
    /// A reference to a location at which the other resource is found. Internal
    /// fragment references (start with '#') refer to contained resources.
    pub reference: Option<String>,
    /// Type the reference refers to (e.g. "Patient")
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Uri>,
    /// Logical reference, when literal reference is not known
    pub identifier: Option<Identifier>,
    /// Text alternative for the resource
    pub display: Option<String>,
}
