use crate::FhirSerde;
use crate::r4::{Code, Extension, Period, String};

/// FHIR HumanName type
///
/// A human's name with the ability to identify parts and usage.
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/Element
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [HumanName](http://hl7.org/fhir/StructureDefinition/HumanName)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct HumanName {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// usual | official | temp | nickname | anonymous | old | maiden
    #[fhir_serde(rename = "use")]
    pub r#use: Option<Code>,
    /// Text representation of the full name
    pub text: Option<String>,
    /// Family name (often called 'Surname')
    pub family: Option<String>,
    /// Given names (not always 'first'). Includes middle names
    ///
    /// Given name.
    pub given: Vec<String>,
    /// Parts that come before the name
    pub prefix: Vec<String>,
    /// Parts that come after the name
    pub suffix: Vec<String>,
    /// Time period when name was/is in use
    pub period: Option<Period>,
}
