use crate::FhirSerde;
use crate::r4::{
    CodeableConcept, Code, DateTime, Decimal, Duration, Extension, Period, PositiveInt, Range,
    Time, UnsignedInt,
};

/// Choice of types for the bounds\[x\] field in TimingRepeat
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "bounds")]
pub enum TimingRepeatBounds {
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "boundsDuration")]
    Duration(Duration),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "boundsRange")]
    Range(Range),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "boundsPeriod")]
    Period(Period),
}

/// When the event is to occur
///
/// A set of rules that describe when the event is scheduled.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct TimingRepeat {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Length/Range of lengths, or (Start and/or end) limits
    #[fhir_serde(flatten)]
    pub bounds: Option<TimingRepeatBounds>,
    /// Number of times to repeat
    pub count: Option<PositiveInt>,
    /// Maximum number of times to repeat
    #[fhir_serde(rename = "countMax")]
    pub count_max: Option<PositiveInt>,
    /// How long when it happens
    pub duration: Option<Decimal>,
    /// How long when it happens (Max)
    #[fhir_serde(rename = "durationMax")]
    pub duration_max: Option<Decimal>,
    /// s | min | h | d | wk | mo | a - unit of time (UCUM)
    #[fhir_serde(rename = "durationUnit")]
    pub duration_unit: Option<Code>,
    /// Event occurs frequency times per period
    pub frequency: Option<PositiveInt>,
    /// Event occurs up to frequencyMax times per period
    #[fhir_serde(rename = "frequencyMax")]
    pub frequency_max: Option<PositiveInt>,
    /// Event occurs frequency times per period
    pub period: Option<Decimal>,
    /// Upper limit of period (3-4 hours)
    #[fhir_serde(rename = "periodMax")]
    pub period_max: Option<Decimal>,
    /// s | min | h | d | wk | mo | a - unit of time (UCUM)
    #[fhir_serde(rename = "periodUnit")]
    pub period_unit: Option<Code>,
    /// mon | tue | wed | thu | fri | sat | sun
    #[fhir_serde(rename = "dayOfWeek")]
    pub day_of_week: Vec<Code>,
    /// Time of day for action
    #[fhir_serde(rename = "timeOfDay")]
    pub time_of_day: Vec<Time>,
    /// Code for time period of occurrence
    pub when: Vec<Code>,
    /// Minutes from event (before or after)
    pub offset: Option<UnsignedInt>,
}

/// FHIR Timing type
///
/// Specifies an event that may occur multiple times. Timing schedules are used to
/// record when things are planned, expected or requested to occur.
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/BackboneElement
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Timing](http://hl7.org/fhir/StructureDefinition/Timing)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Timing {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// When the event occurs
    pub event: Vec<DateTime>,
    /// When the event is to occur
    pub repeat: Option<TimingRepeat>,
    /// BID | TID | QID | AM | PM | QD | QOD | +
    pub code: Option<CodeableConcept>,
}
