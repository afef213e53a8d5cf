use crate::FhirSerde;
use crate::r4::{
    Age, Annotation, Code, CodeableConcept, DateTime, Extension, Id, Identifier, Meta, Narrative,
    Period, Range, Reference, Resource, String, Uri,
};

/// Choice of types for the onset\[x\] field in Condition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "onset")]
pub enum ConditionOnset {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "onsetDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "onsetAge")]
    Age(Age),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "onsetPeriod")]
    Period(Period),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "onsetRange")]
    Range(Range),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "onsetString")]
    String(String),
}

/// Choice of types for the abatement\[x\] field in Condition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "abatement")]
pub enum ConditionAbatement {
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "abatementDateTime")]
    DateTime(DateTime),
    /// Variant accepting the Age type.
    #[fhir_serde(rename = "abatementAge")]
    Age(Age),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "abatementPeriod")]
    Period(Period),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "abatementRange")]
    Range(Range),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "abatementString")]
    String(String),
}

/// Stage/grade, usually assessed formally
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct ConditionStage {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// Simple summary (disease specific)
    pub summary: Option<CodeableConcept>,
    /// Formal record of assessment
    pub assessment: Vec<Reference>,
    /// Kind of staging
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
}

/// Supporting evidence
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct ConditionEvidence {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// Manifestation/symptom
    pub code: Vec<CodeableConcept>,
    /// Supporting information found elsewhere
    pub detail: Vec<Reference>,
}

/// FHIR Condition type
///
/// A clinical condition, problem, diagnosis, or other event, situation, issue, or
/// clinical concept that has risen to a level of concern.
///
/// ## Type: Resource type
/// Base type: http://hl7.org/fhir/StructureDefinition/DomainResource
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Condition](http://hl7.org/fhir/StructureDefinition/Condition)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
#[fhir_serde(resource)]
pub struct Condition {
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
    /// External Ids for this condition
    pub identifier: Vec<Identifier>,
    /// active | recurrence | relapse | inactive | remission | resolved
    #[fhir_serde(rename = "clinicalStatus")]
    pub clinical_status: Option<CodeableConcept>,
    /// unconfirmed | provisional | differential | confirmed | refuted | entered-in-error
    #[fhir_serde(rename = "verificationStatus")]
    pub verification_status: Option<CodeableConcept>,
    /// problem-list-item | encounter-diagnosis
    pub category: Vec<CodeableConcept>,
    /// Subjective severity of condition
    pub severity: Option<CodeableConcept>,
    /// Identification of the condition, problem or diagnosis
    pub code: Option<CodeableConcept>,
    /// Anatomical location, if relevant
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Vec<CodeableConcept>,
    /// Who has the condition?
    pub subject: Reference,
    /// Encounter created as part of
    pub encounter: Option<Reference>,
    /// Estimated or actual date,  date-time, or age
    #[fhir_serde(flatten)]
    pub onset: Option<ConditionOnset>,
    /// When in resolution/remission
    #[fhir_serde(flatten)]
    pub abatement: Option<ConditionAbatement>,
    /// Date record was first recorded
    #[fhir_serde(rename = "recordedDate")]
    pub recorded_date: Option<DateTime>,
    /// Who recorded the condition
    pub recorder: Option<Reference>,
    /// Person who asserts this condition
    pub asserter: Option<Reference>,
    /// Stage/grade, usually assessed formally
    pub stage: Vec<ConditionStage>,
    /// Supporting evidence
    pub evidence: Vec<ConditionEvidence>,
    /// Additional information about the Condition
    pub note: Vec<Annotation>,
}
