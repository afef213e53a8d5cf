//! Byte- and text-level entry points that keep the typed [`FhirError`].
//!
//! The derived `serde` implementations work with `serde_json::from_str` directly, but
//! they flatten errors into strings. These functions return the structured error, so
//! callers can match on [`FhirError::ConflictingChoice`] or read [`FhirError::path`].
//!
//! ```rust
//! use atrius_fhir_r4::json;
//! use atrius_fhir_r4::r4::{Patient, Resource};
//!
//! let patient: Patient = json::from_str(r#"{"resourceType": "Patient", "active": true}"#)?;
//! let any: Resource = json::from_str(&json::to_string(&patient)?)?;
//! assert_eq!(any.resource_type(), "Patient");
//! # Ok::<(), atrius_fhir_r4::FhirError>(())
//! ```

use serde_json::Value;

use crate::codec::FhirJson;
use crate::error::FhirError;

pub fn from_str<T: FhirJson>(text: &str) -> Result<T, FhirError> {
    let value: Value = serde_json::from_str(text)?;
    T::from_json(value)
}

pub fn from_slice<T: FhirJson>(bytes: &[u8]) -> Result<T, FhirError> {
    let value: Value = serde_json::from_slice(bytes)?;
    T::from_json(value)
}

pub fn from_value<T: FhirJson>(value: Value) -> Result<T, FhirError> {
    T::from_json(value)
}

pub fn to_value<T: FhirJson>(value: &T) -> Result<Value, FhirError> {
    value.to_json()
}

pub fn to_string<T: FhirJson>(value: &T) -> Result<String, FhirError> {
    Ok(serde_json::to_string(&value.to_json()?)?)
}

pub fn to_string_pretty<T: FhirJson>(value: &T) -> Result<String, FhirError> {
    Ok(serde_json::to_string_pretty(&value.to_json()?)?)
}

pub fn to_vec<T: FhirJson>(value: &T) -> Result<Vec<u8>, FhirError> {
    Ok(serde_json::to_vec(&value.to_json()?)?)
}
