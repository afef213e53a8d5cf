use crate::FhirSerde;
use crate::r4::{DateTime, Extension};

/// FHIR Period type
///
/// A time period defined by a start and end date and optionally time.
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/Element
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Period](http://hl7.org/fhir/StructureDefinition/Period)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Period {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Starting time with inclusive boundary
    pub start: Option<DateTime>,
    /// End time with inclusive boundary, if not ongoing
    pub end: Option<DateTime>,
}
