use crate::FhirSerde;
use crate::r4::{Canonical, Coding, Extension, Id, Instant, Uri};

/// FHIR Meta type
///
/// The metadata about a resource. This is content in the resource that is maintained by
/// the infrastructure. Changes to the content might not always be associated with
/// version changes to the resource.
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/Element
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Meta](http://hl7.org/fhir/StructureDefinition/Meta)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Meta {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Version specific identifier
    #[fhir_serde(rename = "versionId")]
    pub version_id: Option<Id>,
    /// When the resource version last changed
    #[fhir_serde(rename = "lastUpdated")]
    pub last_updated: Option<Instant>,
    /// Identifies where the resource comes from
    pub source: Option<Uri>,
    /// Profiles this resource claims to conform to
    pub profile: Vec<Canonical>,
    /// Security Labels applied to this resource
    pub security: Vec<Coding>,
    /// Tags applied to this resource
    pub tag: Vec<Coding>,
}
