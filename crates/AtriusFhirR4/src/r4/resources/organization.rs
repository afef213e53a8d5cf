use crate::FhirSerde;
use crate::r4::{
    Address, Boolean, Code, CodeableConcept, ContactPoint, Extension, HumanName, Id, Identifier,
    Meta, Narrative, Reference, Resource, String, Uri,
};

/// Contact for the organization for a certain purpose
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct OrganizationContact {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// The type of contact
    pub purpose: Option<CodeableConcept>,
    /// A name associated with the contact
    pub name: Option<HumanName>,
    /// Contact details (telephone, email, etc.)  for a contact
    pub telecom: Vec<ContactPoint>,
    /// Visiting or postal addresses for the contact
    pub address: Option<Address>,
}

/// FHIR Organization type
///
/// A formally or informally recognized grouping of people or organizations formed for
/// the purpose of achieving some form of collective action.
///
/// ## Type: Resource type
/// Base type: http://hl7.org/fhir/StructureDefinition/DomainResource
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Organization](http://hl7.org/fhir/StructureDefinition/Organization)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
#[fhir_serde(resource)]
pub struct Organization {
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
    /// Identifies this organization  across multiple systems
    pub identifier: Vec<Identifier>,
    /// Whether the organization's record is still in active use
    pub active: Option<Boolean>,
    /// Kind of organization
    #[fhir_serde(rename = "type")]
    pub r#type: Vec<CodeableConcept>,
    /// Name used for the organization
    pub name: Option<String>,
    /// A list of alternate names that the organization is known as, or was known as in
    /// the past
    pub alias: Vec<String>,
    /// A contact detail for the organization
    pub telecom: Vec<ContactPoint>,
    /// An address for the organization
    pub address: Vec<Address>,
    /// The organization of which this organization forms a part
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Reference>,
    /// Contact for the organization for a certain purpose
    pub contact: Vec<OrganizationContact>,
    /// Technical endpoints providing access to services operated for the organization
    pub endpoint: Vec<Reference>,
}
