use crate::FhirSerde;
use crate::r4::{
    Annotation, Boolean, Code, CodeableConcept, DateTime, Extension, Id, Identifier, Instant,
    Integer, Meta, Narrative, Period, Quantity, Range, Ratio, Reference, Resource, SimpleQuantity,
    String, Time, Timing, Uri,
};

/// Choice of types for the effective\[x\] field in Observation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "effective")]
pub enum ObservationEffective {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "effectiveDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "effectivePeriod")]
    Period(Period),
    /// Variant accepting the Timing type.
    #[fhir_serde(rename = "effectiveTiming")]
    Timing(Timing),
    /// Variant accepting the Instant type.
    #[fhir_serde(rename = "effectiveInstant")]
    Instant(Instant),
}

/// Choice of types for the value\[x\] field in Observation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum ObservationValue {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "valueString")]
    String(String),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "valueRatio")]
    Ratio(Ratio),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "valueTime")]
    Time(Time),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "valuePeriod")]
    Period(Period),
}

/// Choice of types for the value\[x\] field in ObservationComponent
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum ObservationComponentValue {
    /// Variant accepting the Quantity type.
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "valueString")]
    String(String),
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    /// Variant accepting the Ratio type.
    #[fhir_serde(rename = "valueRatio")]
    Ratio(Ratio),
    /// Variant accepting the Time type.
    #[fhir_serde(rename = "valueTime")]
    Time(Time),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "valuePeriod")]
    Period(Period),
}

/// Provides guide for interpretation
///
/// Guidance on how to interpret the value by comparison to a normal or recommended
/// range. Multiple reference ranges are interpreted as an "OR".
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct ObservationReferenceRange {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// Low Range, if relevant
    pub low: Option<SimpleQuantity>,
    /// High Range, if relevant
    pub high: Option<SimpleQuantity>,
    /// Reference range qualifier
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Reference range population
    #[fhir_serde(rename = "appliesTo")]
    pub applies_to: Vec<CodeableConcept>,
    /// Applicable age range, if relevant
    pub age: Option<Range>,
    /// Text based reference range in an observation
    pub text: Option<String>,
}

/// Component results
///
/// Some observations have multiple component observations. These component
/// observations are expressed as separate code value pairs that share the same
/// attributes.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct ObservationComponent {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// Type of component observation (code / type)
    pub code: CodeableConcept,
    /// Actual component result
    #[fhir_serde(flatten)]
    pub value: Option<ObservationComponentValue>,
    /// Why the component result is missing
    #[fhir_serde(rename = "dataAbsentReason")]
    pub data_absent_reason: Option<CodeableConcept>,
    /// High, low, normal, etc.
    pub interpretation: Vec<CodeableConcept>,
    /// Provides guide for interpretation of component result
    #[fhir_serde(rename = "referenceRange")]
    pub reference_range: Vec<ObservationReferenceRange>,
}

/// FHIR Observation type
///
/// Measurements and simple assertions made about a patient, device or other subject.
///
/// ## Purpose
///
/// Observations are a key aspect of healthcare. This resource is used to capture
/// vital signs such as body weight, blood pressure, and temperature, laboratory data,
/// imaging results and clinical findings.
///
/// ## Type: Resource type
/// Base type: http://hl7.org/fhir/StructureDefinition/DomainResource
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Observation](http://hl7.org/fhir/StructureDefinition/Observation)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
#[fhir_serde(resource)]
pub struct Observation {
    /// Logical id of this artifact
    pub id: Option<Id>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir_serde(rename = "implicitRules")]
    pub implicit_rules: Option<Uri>,
    /// Language of the resource content
    pub language: Option<Code>,
    /// Text summary of the resource, for human interpretation
    pub text: Option<Narrative>,
    /// Contained, inline Resources
    ///
    /// These resources do not have an independent existence apart from the resource that
    /// contains them - they cannot be identified independently, and nor can they have
    /// their own independent transaction scope.
    pub contained: Vec<Resource>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// Business Identifier for observation
    pub identifier: Vec<Identifier>,
    /// Fulfills plan, proposal or order
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Vec<Reference>,
    /// Part of referenced event
    #[fhir_serde(rename = "partOf")]
    pub part_of: Vec<Reference>,
    /// registered | preliminary | final | amended +
    pub status: Code,
    /// Classification of  type of observation
    pub category: Vec<CodeableConcept>,
    /// Type of observation (code / type)
    pub code: CodeableConcept,
    /// Who and/or what the observation is about
    pub subject: Option<Reference>,
    /// What the observation is about, when it is not about the subject of record
    pub focus: Vec<Reference>,
    /// Healthcare event during which this observation is made
    pub encounter: Option<Reference>,
    /// Clinically relevant time/time-period for observation
    ///
    /// The time or time-period the observed value is asserted as being true. For
    /// biological subjects - e.g. human patients - this is usually called the
    /// "physiologically relevant time".
    #[fhir_serde(flatten)]
    pub effective: Option<ObservationEffective>,
    /// Date/Time this version was made available
    pub issued: Option<Instant>,
    /// Who is responsible for the observation
    pub performer: Vec<Reference>,
    /// Actual result
    #[fhir_serde(flatten)]
    pub value: Option<ObservationValue>,
    /// Why the result is missing
    #[fhir_serde(rename = "dataAbsentReason")]
    pub data_absent_reason: Option<CodeableConcept>,
    /// High, low, normal, etc.
    pub interpretation: Vec<CodeableConcept>,
    /// Comments about the observation
    pub note: Vec<Annotation>,
    /// Observed body part
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<CodeableConcept>,
    /// How it was done
    pub method: Option<CodeableConcept>,
    /// Specimen used for this observation
    pub specimen: Option<Reference>,
    /// (Measurement) Device
    pub device: Option<Reference>,
    /// Provides guide for interpretation
    #[fhir_serde(rename = "referenceRange")]
    pub reference_range: Vec<ObservationReferenceRange>,
    /// Related resource that belongs to the Observation group
    #[fhir_serde(rename = "hasMember")]
    pub has_member: Vec<Reference>,
    /// Related measurements the observation is made from
    #[fhir_serde(rename = "derivedFrom")]
    pub derived_from: Vec<Reference>,
    /// Component results
    pub component: Vec<ObservationComponent>,
}
