use crate::FhirSerde;
use crate::r4::{Coding, Extension, String};

/// FHIR CodeableConcept type
///
/// A concept that may be defined by a formal reference to a terminology or ontology or
/// may be provided by text.
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/Element
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [CodeableConcept](http://hl7.org/fhir/StructureDefinition/CodeableConcept)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct CodeableConcept {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Code defined by a terminology system
    pub coding: Vec<Coding>,
    /// Plain text representation of the concept
    pub text: Option<String>,
}
