use crate::FhirSerde;
use crate::r4::{Code, Decimal, Extension, String, Uri};

/// FHIR Quantity type
///
/// A measured amount (or an amount that can potentially be measured). Note that
/// measured amounts include amounts that are not precisely quantified, including
/// amounts involving arbitrary units and floating currencies.
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/Element
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Quantity](http://hl7.org/fhir/StructureDefinition/Quantity)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Quantity {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Numerical value (with implicit precision)
    pub value: Option<Decimal>,
    /// < | <= | >= | > - how to understand the value
    pub comparator: Option<Code>,
    /// Unit representation
    pub unit: Option<String>,
    /// System that defines coded unit form
    pub system: Option<Uri>,
    /// Coded form of the unit
    pub code: Option<Code>,
}

/// A duration of time during which an organism (or a process) has existed.
///
/// See: [Age](http://hl7.org/fhir/StructureDefinition/Age)
pub type Age = Quantity;

/// A measured amount of discrete, countable items.
///
/// See: [Count](http://hl7.org/fhir/StructureDefinition/Count)
pub type Count = Quantity;

/// A length - a value with a unit that is a physical distance.
///
/// See: [Distance](http://hl7.org/fhir/StructureDefinition/Distance)
pub type Distance = Quantity;

/// A length of time.
///
/// See: [Duration](http://hl7.org/fhir/StructureDefinition/Duration)
pub type Duration = Quantity;

/// A fixed quantity (no comparator).
///
/// See: [SimpleQuantity](http://hl7.org/fhir/StructureDefinition/SimpleQuantity)
pub type SimpleQuantity = Quantity;
