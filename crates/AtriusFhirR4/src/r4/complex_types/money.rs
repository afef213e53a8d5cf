use crate::FhirSerde;
use crate::r4::{Code, Decimal, Extension};

/// FHIR Money type
///
/// An amount of economic utility in some recognized currency.
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/Element
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Money](http://hl7.org/fhir/StructureDefinition/Money)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Money {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Numerical value (with implicit precision)
    pub value: Option<Decimal>,
    /// ISO 4217 Currency Code
    pub currency: Option<Code>,
}
