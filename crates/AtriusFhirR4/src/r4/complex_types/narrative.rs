use crate::FhirSerde;
use crate::r4::{Code, Extension, Xhtml};

/// FHIR Narrative type
///
/// A human-readable summary of the resource conveying the essential clinical and
/// business information for the resource.
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/Element
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Narrative](http://hl7.org/fhir/StructureDefinition/Narrative)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Narrative {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// generated | extensions | additional | empty
    pub status: Code,
    /// Limited xhtml content
    pub div: Xhtml,
}
