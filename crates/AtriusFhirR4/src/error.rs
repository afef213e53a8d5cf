//! Error type shared by every decode and encode operation.

use serde_json::Value;
use thiserror::Error;

/// Errors produced while decoding or encoding FHIR JSON.
///
/// Errors raised below the top level of a document are wrapped in
/// [`FhirError::AtPath`], which records a FHIRPath-like location such as
/// `Observation.component[1].valueQuantity.value`. Use [`FhirError::root_cause`] to
/// inspect the underlying failure regardless of where it happened.
#[derive(Debug, Error)]
pub enum FhirError {
    /// The input was not syntactically valid JSON, or a serde bridge failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// More than one member of a `[x]` choice element was present.
    #[error("conflicting values for {type_name}.{field}[x]: {}", .keys.join(", "))]
    ConflictingChoice {
        type_name: &'static str,
        field: &'static str,
        keys: Vec<String>,
    },

    /// The `resourceType` discriminator names a type the registry does not know.
    #[error("unknown resourceType '{0}'")]
    UnknownResourceType(String),

    /// A resource object had no `resourceType` property.
    #[error("missing resourceType")]
    MissingResourceType,

    /// A resource object declared a different `resourceType` than the target type.
    #[error("expected resourceType '{expected}', found '{found}'")]
    ResourceTypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// A JSON value had the wrong shape (e.g. a string where an object was required).
    #[error("expected {expected}, found {found}")]
    InvalidType {
        expected: &'static str,
        found: &'static str,
    },

    /// A JSON value had the right shape but an invalid lexical form.
    #[error("invalid {kind} value '{value}'")]
    InvalidValue { kind: &'static str, value: String },

    /// An error located at a path inside the document.
    #[error("{path}: {source}")]
    AtPath {
        path: String,
        #[source]
        source: Box<FhirError>,
    },
}

impl FhirError {
    /// Builds an [`FhirError::InvalidType`] naming the JSON kind that was found.
    pub fn invalid_type(expected: &'static str, found: &Value) -> Self {
        FhirError::InvalidType {
            expected,
            found: json_kind(found),
        }
    }

    pub fn invalid_value(kind: &'static str, value: impl Into<String>) -> Self {
        FhirError::InvalidValue {
            kind,
            value: value.into(),
        }
    }

    /// Locates the error under the JSON property `key`.
    ///
    /// A leading resource type in the inner path is dropped, so an error inside a
    /// contained resource reads `contained[0].name[0].given` rather than repeating
    /// the contained resource's own type.
    pub fn at(self, key: &str) -> Self {
        match self {
            FhirError::AtPath { path, source } => FhirError::AtPath {
                path: join_path(key, strip_resource_type(&path)),
                source,
            },
            other => FhirError::AtPath {
                path: key.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Locates the error under element `index` of the array property `key`.
    pub fn at_index(self, key: &str, index: usize) -> Self {
        self.at(&format!("{key}[{index}]"))
    }

    /// Anchors the error path at a resource type.
    pub fn within(self, type_name: &str) -> Self {
        match self {
            FhirError::AtPath { path, source } => {
                let path = if starts_with_type_name(&path) {
                    path
                } else {
                    join_path(type_name, &path)
                };
                FhirError::AtPath { path, source }
            }
            other => FhirError::AtPath {
                path: type_name.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// The location of the error, when it was raised below the document root.
    pub fn path(&self) -> Option<&str> {
        match self {
            FhirError::AtPath { path, .. } => Some(path),
            _ => None,
        }
    }

    /// The underlying error with any location wrapper removed.
    pub fn root_cause(&self) -> &FhirError {
        match self {
            FhirError::AtPath { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// FHIR element names are lowerCamelCase and resource types are UpperCamelCase.
fn starts_with_type_name(path: &str) -> bool {
    path.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

fn strip_resource_type(path: &str) -> &str {
    if !starts_with_type_name(path) {
        return path;
    }
    match path.find('.') {
        Some(dot) => &path[dot + 1..],
        None => "",
    }
}

fn join_path(head: &str, tail: &str) -> String {
    if tail.is_empty() {
        head.to_string()
    } else if tail.starts_with('[') {
        format!("{head}{tail}")
    } else {
        format!("{head}.{tail}")
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
