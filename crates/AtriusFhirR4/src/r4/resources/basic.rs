use crate::FhirSerde;
use crate::r4::{
    Code, CodeableConcept, Date, Extension, Id, Identifier, Meta, Narrative, Reference, Resource,
    Uri,
};

/// FHIR Basic type
///
/// Basic is used for handling concepts not yet defined in FHIR, narrative-only resources
/// that don't map to an existing resource, and custom resources not appropriate for
/// inclusion in the FHIR specification.
///
/// ## Type: Resource type
/// Base type: http://hl7.org/fhir/StructureDefinition/DomainResource
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Basic](http://hl7.org/fhir/StructureDefinition/Basic)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
#[fhir_serde(resource)]
pub struct Basic {
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
    /// Business identifier
    pub identifier: Vec<Identifier>,
    /// Kind of Resource
    pub code: CodeableConcept,
    /// Identifies the focus of this resource
    pub subject: Option<Reference>,
    /// When created
    pub created: Option<Date>,
    /// Who created
    pub author: Option<Reference>,
}
