use crate::FhirSerde;
use crate::r4::{
    Age, Annotation, Canonical, Code, CodeableConcept, DateTime, Extension, Id, Identifier, Meta,
    Narrative, Period, Range, Reference, Resource, String, Uri,
};

/// Choice of types for the performed\[x\] field in Procedure
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "performed")]
pub enum ProcedurePerformed {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "performedDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "performedPeriod")]
    Period(Period),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "performedString")]
    String(String),
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "performedAge")]
    Age(Age),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "performedRange")]
    Range(Range),
}

/// The people who performed the procedure
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct ProcedurePerformer {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// Type of performance
    pub function: Option<CodeableConcept>,
    /// The reference to the practitioner
    pub actor: Reference,
    /// Organization the device or practitioner was acting for
    #[fhir_serde(rename = "onBehalfOf")]
    pub on_behalf_of: Option<Reference>,
}

/// Manipulated, implanted, or removed device
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct ProcedureFocalDevice {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// Kind of change to device
    pub action: Option<CodeableConcept>,
    /// Device that was changed
    pub manipulated: Reference,
}

/// FHIR Procedure type
///
/// An action that is or was performed on or for a patient. This can be a physical
/// intervention like an operation, or less invasive like long term services,
/// counseling, or hypnotherapy.
///
/// ## Type: Resource type
/// Base type: http://hl7.org/fhir/StructureDefinition/DomainResource
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Procedure](http://hl7.org/fhir/StructureDefinition/Procedure)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
#[fhir_serde(resource)]
pub struct Procedure {
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
    /// External Identifiers for this procedure
    pub identifier: Vec<Identifier>,
    /// Instantiates FHIR protocol or definition
    #[fhir_serde(rename = "instantiatesCanonical")]
    pub instantiates_canonical: Vec<Canonical>,
    /// Instantiates external protocol or definition
    #[fhir_serde(rename = "instantiatesUri")]
    pub instantiates_uri: Vec<Uri>,
    /// A request for this procedure
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Vec<Reference>,
    /// Part of referenced event
    #[fhir_serde(rename = "partOf")]
    pub part_of: Vec<Reference>,
    /// preparation | in-progress | not-done | on-hold | stopped | completed |
    /// entered-in-error | unknown
    pub status: Code,
    /// Reason for current status
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<CodeableConcept>,
    /// Classification of the procedure
    pub category: Option<CodeableConcept>,
    /// Identification of the procedure
    pub code: Option<CodeableConcept>,
    /// Who the procedure was performed on
    pub subject: Reference,
    /// Encounter created as part of
    pub encounter: Option<Reference>,
    /// When the procedure was performed
    #[fhir_serde(flatten)]
    pub performed: Option<ProcedurePerformed>,
    /// Who recorded the procedure
    pub recorder: Option<Reference>,
    /// Person who asserts this procedure
    pub asserter: Option<Reference>,
    /// The people who performed the procedure
    pub performer: Vec<ProcedurePerformer>,
    /// Where the procedure happened
    pub location: Option<Reference>,
    /// Coded reason procedure performed
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Vec<CodeableConcept>,
    /// The justification that the procedure was performed
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Vec<Reference>,
    /// Target body sites
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Vec<CodeableConcept>,
    /// The result of procedure
    pub outcome: Option<CodeableConcept>,
    /// Any report resulting from the procedure
    pub report: Vec<Reference>,
    /// Complication following the procedure
    pub complication: Vec<CodeableConcept>,
    /// A condition that is a result of the procedure
    #[fhir_serde(rename = "complicationDetail")]
    pub complication_detail: Vec<Reference>,
    /// Instructions for follow up
    #[fhir_serde(rename = "followUp")]
    pub follow_up: Vec<CodeableConcept>,
    /// Additional information about the procedure
    pub note: Vec<Annotation>,
    /// Manipulated, implanted, or removed device
    #[fhir_serde(rename = "focalDevice")]
    pub focal_device: Vec<ProcedureFocalDevice>,
    /// Items used during procedure
    #[fhir_serde(rename = "usedReference")]
    pub used_reference: Vec<Reference>,
    /// Coded items used during the procedure
    #[fhir_serde(rename = "usedCode")]
    pub used_code: Vec<CodeableConcept>,
}
