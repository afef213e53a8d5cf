use crate::FhirSerde;
use crate::r4::{Extension, Quantity};

/// FHIR Ratio type
///
/// A relationship of two Quantity values - expressed as a numerator and a denominator.
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/Element
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Ratio](http://hl7.org/fhir/StructureDefinition/Ratio)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Ratio {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Numerator value
    pub numerator: Option<Quantity>,
    /// Denominator value
    pub denominator: Option<Quantity>,
}
