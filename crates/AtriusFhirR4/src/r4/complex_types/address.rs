use crate::FhirSerde;
use crate::r4::{Code, Extension, Period, String};

/// FHIR Address type
///
/// An address expressed using postal conventions (as opposed to GPS or other location
/// definition formats).
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/Element
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Address](http://hl7.org/fhir/StructureDefinition/Address)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Address {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// home | work | temp | old | billing - purpose of this address
    #[fhir_serde(rename = "use")]
    pub r#use: Option<Code>,
    /// postal | physical | both
    #[fhir_serde(rename = "type")]
    pub r#type: Option<Code>,
    /// Text representation of the address
    pub text: Option<String>,
    /// Street name, number, direction & P.O. Box etc.
    pub line: Vec<String>,
    /// Name of city, town etc.
    pub city: Option<String>,
    /// District name (aka county)
    pub district: Option<String>,
    /// Sub-unit of country (abbreviations ok)
    pub state: Option<String>,
    /// Postal code for area
    #[fhir_serde(rename = "postalCode")]
    pub postal_code: Option<String>,
    /// Country (e.g. can be ISO 3166 2 or 3 letter code)
    pub country: Option<String>,
    /// Time period when address was/is in use
    pub period: Option<Period>,
}
