use crate::FhirSerde;
use crate::r4::{Code, CodeableConcept, Extension, Period, Reference, String, Uri};

/// FHIR Identifier type
///
/// An identifier - identifies some entity uniquely and unambiguously. Typically this is
/// used for business identifiers.
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/Element
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Identifier](http://hl7.org/fhir/StructureDefinition/Identifier)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Identifier {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// usual | official | temp | secondary | old (If known)
    #[fhir_serde(rename = "use")]
    pub r#use: Option<Code>,
    /// Description of identifier
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The namespace for the identifier value
    pub system: Option<Uri>,
    /// The value that is unique
    pub value: Option<String>,
    /// Time period when id is/was valid for use
    pub period: Option<Period>,
    /// Organization that issued id (may be just text)
    pub assigner: Option<Box<Reference>>,
}
