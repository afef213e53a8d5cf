use crate::FhirSerde;
use crate::r4::{Extension, SimpleQuantity};

/// FHIR Range type
///
/// A set of ordered Quantities defined by a low and high limit.
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/Element
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Range](http://hl7.org/fhir/StructureDefinition/Range)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Range {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Low limit
    pub low: Option<SimpleQuantity>,
    /// High limit
    pub high: Option<SimpleQuantity>,
}
