use crate::FhirSerde;
use crate::r4::{
    Annotation, Code, CodeableConcept, DateTime, Duration, Extension, Id, Identifier, Meta,
    Narrative, Period, Reference, Resource, SimpleQuantity, String, Uri,
};

/// Choice of types for the collected\[x\] field in SpecimenCollection
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "collected")]
pub enum SpecimenCollectionCollected {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "collectedDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "collectedPeriod")]
    Period(Period),
}

/// Choice of types for the fastingStatus\[x\] field in SpecimenCollection
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "fastingStatus")]
pub enum SpecimenCollectionFastingStatus {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "fastingStatusCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "fastingStatusDuration")]
    Duration(Duration),
}

/// Choice of types for the time\[x\] field in SpecimenProcessing
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "time")]
pub enum SpecimenProcessingTime {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "timeDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "timePeriod")]
    Period(Period),
}

/// Choice of types for the additive\[x\] field in SpecimenContainer
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "additive")]
pub enum SpecimenContainerAdditive {
    /// Variant accepting the CodeableConcept type.
    #[fhir_serde(rename = "additiveCodeableConcept")]
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "additiveReference")]
    Reference(Reference),
}

/// Collection details
///
/// Details concerning the specimen collection.
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct SpecimenCollection {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// Who collected the specimen
    pub collector: Option<Reference>,
    /// Collection time
    #[fhir_serde(flatten)]
    pub collected: Option<SpecimenCollectionCollected>,
    /// How long it took to collect specimen
    pub duration: Option<Duration>,
    /// The quantity of specimen collected
    pub quantity: Option<SimpleQuantity>,
    /// Technique used to perform collection
    pub method: Option<CodeableConcept>,
    /// Anatomical collection site
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<CodeableConcept>,
    /// Whether or how long patient abstained from food and/or drink
    #[fhir_serde(flatten)]
    pub fasting_status: Option<SpecimenCollectionFastingStatus>,
}

/// Processing and processing step details
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct SpecimenProcessing {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// Textual description of procedure
    pub description: Option<String>,
    /// Indicates the treatment step  applied to the specimen
    pub procedure: Option<CodeableConcept>,
    /// Material used in the processing step
    pub additive: Vec<Reference>,
    /// Date and time of specimen processing
    #[fhir_serde(flatten)]
    pub time: Option<SpecimenProcessingTime>,
}

/// Direct container of specimen (tube/slide, etc.)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct SpecimenContainer {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// Id for the container
    pub identifier: Vec<Identifier>,
    /// Textual description of the container
    pub description: Option<String>,
    /// Kind of container directly associated with specimen
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Container volume or size
    pub capacity: Option<SimpleQuantity>,
    /// Quantity of specimen within container
    #[fhir_serde(rename = "specimenQuantity")]
    pub specimen_quantity: Option<SimpleQuantity>,
    /// Additive associated with container
    #[fhir_serde(flatten)]
    pub additive: Option<SpecimenContainerAdditive>,
}

/// FHIR Specimen type
///
/// A sample to be used for analysis.
///
/// ## Type: Resource type
/// Base type: http://hl7.org/fhir/StructureDefinition/DomainResource
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Specimen](http://hl7.org/fhir/StructureDefinition/Specimen)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
#[fhir_serde(resource)]
pub struct Specimen {
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
    pub contained: Vec<Resource>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// External Identifier
    pub identifier: Vec<Identifier>,
    /// Identifier assigned by the lab
    #[fhir_serde(rename = "accessionIdentifier")]
    pub accession_identifier: Option<Identifier>,
    /// available | unavailable | unsatisfactory | entered-in-error
    pub status: Option<Code>,
    /// Kind of material that forms the specimen
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// Where the specimen came from. This may be from patient(s), from a location
    /// (e.g., the source of an environmental sample), or a sampling of a substance or a
    /// device
    pub subject: Option<Reference>,
    /// The time when specimen was received for processing
    #[fhir_serde(rename = "receivedTime")]
    pub received_time: Option<DateTime>,
    /// Specimen from which this specimen originated
    pub parent: Vec<Reference>,
    /// Why the specimen was collected
    pub request: Vec<Reference>,
    /// Collection details
    pub collection: Option<SpecimenCollection>,
    /// Processing and processing step details
    pub processing: Vec<SpecimenProcessing>,
    /// Direct container of specimen (tube/slide, etc.)
    pub container: Vec<SpecimenContainer>,
    /// State of the specimen
    pub condition: Vec<CodeableConcept>,
    /// Comments
    pub note: Vec<Annotation>,
}
