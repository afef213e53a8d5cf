use crate::FhirSerde;
use crate::r4::{DateTime, Extension, Markdown, Reference, String};

/// Choice of types for the author\[x\] field in Annotation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "author")]
pub enum AnnotationAuthor {
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "authorReference")]
    Reference(Reference),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "authorString")]
    String(String),
}

/// FHIR Annotation type
///
/// A text note which also contains information about who made the statement and when.
///
/// ## Type: Complex type
/// Base type: http://hl7.org/fhir/StructureDefinition/Element
///
/// ## Status: active
/// FHIR Version: 4.0.1
///
/// See: [Annotation](http://hl7.org/fhir/StructureDefinition/Annotation)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Annotation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Vec<Extension>,
    /// Individual responsible for the annotation
    #[fhir_serde(flatten)]
    pub author: Option<AnnotationAuthor>,
    /// When the annotation was made
    pub time: Option<DateTime>,
    /// The annotation - text content (as markdown)
    pub text: Markdown,
}
