use crate::FhirSerde;
use crate::r4::{
    Address, Attachment, Boolean, Code, CodeableConcept, ContactPoint, Date, DateTime, Extension,
    HumanName, Id, Identifier, Integer, Meta, Narrative, Period, Reference, Resource, Uri,
};

/// Choice of types for the deceased\[x\] field in Patient
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "deceased")]
pub enum PatientDeceased {
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "deceasedBoolean")]
    Boolean(Boolean),
    /// Variant accepting the DateTime type.
    #[fhir_serde(rename = "deceasedDateTime")]
    DateTime(DateTime),
}

/// Choice of types for the multipleBirth\[x\] field in Patient
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "multipleBirth")]
pub enum PatientMultipleBirth {
    /// Variant accepting the Boolean type.
    #[fhir_serde(rename = "multipleBirthBoolean")]
    Boolean(Boolean),
    /// Variant accepting the Integer type.
    #[fhir_serde(rename = "multipleBirthInteger")]
    Integer(Integer),
}

/// A contact party (e.g. guardian, partner, friend) for the patient
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct PatientContact {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// The kind of relationship
    pub relationship: Vec<CodeableConcept>,
    /// A name associated with the contact person
    pub name: Option<HumanName>,
    /// A contact detail for the person
    pub telecom: Vec<ContactPoint>,
    /// Address for the contact person
    pub address: Option<Address>,
    /// male | female | other | unknown
    pub gender: Option<Code>,
    /// Organization that is associated with the contact
    pub organization: Option<Reference>,
    /// The period during which this contact person or organization is valid to be
    /// contacted relating to this patient
    pub period: Option<Period>,
}

/// A language which may be used to communicate with the patient about his or her health
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct PatientCommunication {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// The language which can be used to communicate with the patient about his or her
    /// health
    pub language: CodeableConcept,
    /// Language preference indicator
    pub preferred: Option<Boolean>,
}

/// Link to another patient resource that concerns the same actual person
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct PatientLink {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// The other patient or related person resource that the link refers to
    pub other: Reference,
    /// replaced-by | replaces | refer | seealso
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
}

/// FHIR Patient type
///
/// Demographics and other administrative information about an individual or animal
/// receiving care or other health-related services.
///
/// ## Purpose
///
/// Tracking patient is the center of the healthcare process.
///
/// ## Type: Resource type
/// Base type: http://hl7.org/fhir/StructureDefinition/DomainResource
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Patient](http://hl7.org/fhir/StructureDefinition/Patient)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
#[fhir_serde(resource)]
pub struct Patient {
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
    /// An identifier for this patient
    pub identifier: Vec<Identifier>,
    /// Whether this patient's record is in active use
    pub active: Option<Boolean>,
    /// A name associated with the patient
    pub name: Vec<HumanName>,
    /// A contact detail for the individual
    pub telecom: Vec<ContactPoint>,
    /// male | female | other | unknown
    pub gender: Option<Code>,
    /// The date of birth for the individual
    #[fhir_serde(rename = "birthDate")]
    pub birth_date: Option<Date>,
    /// Indicates if the individual is deceased or not
    #[fhir_serde(flatten)]
    pub deceased: Option<PatientDeceased>,
    /// An address for the individual
    pub address: Vec<Address>,
    /// Marital (civil) status of a patient
    #[fhir_serde(rename = "maritalStatus")]
    pub marital_status: Option<CodeableConcept>,
    /// Whether patient is part of a multiple birth
    #[fhir_serde(flatten)]
    pub multiple_birth: Option<PatientMultipleBirth>,
    /// Image of the patient
    pub photo: Vec<Attachment>,
    /// A contact party (e.g. guardian, partner, friend) for the patient
    pub contact: Vec<PatientContact>,
    /// A language which may be used to communicate with the patient about his or her
    /// health
    pub communication: Vec<PatientCommunication>,
    /// Patient's nominated primary care provider
    #[fhir_serde(rename = "generalPractitioner")]
    pub general_practitioner: Vec<Reference>,
    /// Organization that is the custodian of the patient record
    #[fhir_serde(rename = "managingOrganization")]
    pub managing_organization: Option<Reference>,
    /// Link to another patient resource that concerns the same actual person
    pub link: Vec<PatientLink>,
}
