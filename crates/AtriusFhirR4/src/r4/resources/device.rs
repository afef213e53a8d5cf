use crate::FhirSerde;
use crate::r4::{
    Annotation, Base64Binary, Code, CodeableConcept, ContactPoint, DateTime, Extension, Id,
    Identifier, Meta, Narrative, Reference, Resource, String, Uri,
};

/// Unique Device Identifier (UDI) Barcode string
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct DeviceUdiCarrier {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// Mandatory fixed portion of UDI
    #[fhir_serde(rename = "deviceIdentifier")]
    pub device_identifier: Option<String>,
    /// UDI Issuing Organization
    pub issuer: Option<Uri>,
    /// Regional UDI authority
    pub jurisdiction: Option<Uri>,
    /// UDI Machine Readable Barcode String
    #[fhir_serde(rename = "carrierAIDC")]
    pub carrier_aidc: Option<Base64Binary>,
    /// UDI Human Readable Barcode String
    #[fhir_serde(rename = "carrierHRF")]
    pub carrier_hrf: Option<String>,
    /// barcode | rfid | manual +
    #[fhir_serde(rename = "entryType")]
    pub entry_type: Option<Code>,
}

/// The name of the device as given by the manufacturer
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct DeviceDeviceName {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// The name of the device
    pub name: String,
    /// udi-label-name | user-friendly-name | patient-reported-name | manufacturer-name |
    /// model-name | other
    #[fhir_serde(rename = "type")]
    pub r#type: Code,
}

/// The actual design of the device or software version running on the device
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct DeviceVersion {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored even if unrecognized
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Vec<Extension>,
    /// The type of the device version
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// A single component of the device version
    pub component: Option<Identifier>,
    /// The version text
    pub value: String,
}

/// FHIR Device type
///
/// A type of a manufactured item that is used in the provision of healthcare without
/// being substantially changed through that activity.
///
/// ## Type: Resource type
/// Base type: http://hl7.org/fhir/StructureDefinition/DomainResource
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Device](http://hl7.org/fhir/StructureDefinition/Device)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
#[fhir_serde(resource)]
pub struct Device {
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
    /// Instance identifier
    pub identifier: Vec<Identifier>,
    /// The reference to the definition for the device
    pub definition: Option<Reference>,
    /// Unique Device Identifier (UDI) Barcode string
    #[fhir_serde(rename = "udiCarrier")]
    pub udi_carrier: Vec<DeviceUdiCarrier>,
    /// active | inactive | entered-in-error | unknown
    pub status: Option<Code>,
    /// online | paused | standby | offline | not-ready | transduc-discon | hw-discon | off
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Vec<CodeableConcept>,
    /// The distinct identification string
    #[fhir_serde(rename = "distinctIdentifier")]
    pub distinct_identifier: Option<String>,
    /// Name of device manufacturer
    pub manufacturer: Option<String>,
    /// Date when the device was made
    #[fhir_serde(rename = "manufactureDate")]
    pub manufacture_date: Option<DateTime>,
    /// Date and time of expiry of this device (if applicable)
    #[fhir_serde(rename = "expirationDate")]
    pub expiration_date: Option<DateTime>,
    /// Lot number of manufacture
    #[fhir_serde(rename = "lotNumber")]
    pub lot_number: Option<String>,
    /// Serial number assigned by the manufacturer
    #[fhir_serde(rename = "serialNumber")]
    pub serial_number: Option<String>,
    /// The name of the device as given by the manufacturer
    #[fhir_serde(rename = "deviceName")]
    pub device_name: Vec<DeviceDeviceName>,
    /// The model number for the device
    #[fhir_serde(rename = "modelNumber")]
    pub model_number: Option<String>,
    /// The part number of the device
    #[fhir_serde(rename = "partNumber")]
    pub part_number: Option<String>,
    /// The kind or type of device
    #[fhir_serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,
    /// The actual design of the device or software version running on the device
    pub version: Vec<DeviceVersion>,
    /// Patient to whom Device is affixed
    pub patient: Option<Reference>,
    /// Organization responsible for device
    pub owner: Option<Reference>,
    /// Details for human/organization for support
    pub contact: Vec<ContactPoint>,
    /// Where the device is found
    pub location: Option<Reference>,
    /// Network address to contact device
    pub url: Option<Uri>,
    /// Device notes and comments
    pub note: Vec<Annotation>,
    /// Safety Characteristics of Device
    pub safety: Vec<CodeableConcept>,
    /// The parent device
    pub parent: Option<Reference>,
}
