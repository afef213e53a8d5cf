//! # FHIR JSON Codec
//!
//! The generic routines every model type is encoded and decoded through. The
//! `FhirSerde` derive expands each struct into a list of calls to these functions, one
//! per field; no type carries hand-written JSON handling.
//!
//! Decoding works on an owned JSON object: each field *takes* its properties out of
//! the object, so a primitive can consume both `name` and `_name`, and a choice field
//! can consume whichever of its sibling keys is present. Properties nobody takes are
//! ignored. Encoding is the mirror image: each field *puts* its properties into the
//! output object, skipping everything that is empty.
//!
//! | Trait              | Implemented by                             |
//! |--------------------|--------------------------------------------|
//! | [`FhirJson`]       | primitives, data types, resources, `Resource` |
//! | [`FhirChoice`]     | `[x]` choice enums                         |
//! | [`FhirResource`]   | concrete resource structs                  |

use serde_json::{Map, Value};

use crate::error::FhirError;

/// A decoded JSON object, in document order.
pub type JsonObject = Map<String, Value>;

/// A type with a FHIR JSON representation.
///
/// Implementors provide [`from_json`](FhirJson::from_json) and
/// [`to_json`](FhirJson::to_json) for a single standalone value. The provided
/// `take_*`/`put_*` methods place that value inside a parent object; primitive
/// elements override them to implement the `_name` shadow convention.
pub trait FhirJson: Sized {
    fn from_json(value: Value) -> Result<Self, FhirError>;

    fn to_json(&self) -> Result<Value, FhirError>;

    /// Whether the value carries no information and must be omitted from the output.
    fn is_empty(&self) -> bool {
        false
    }

    /// Removes the property `key` from `object` and decodes it.
    ///
    /// `null`, and a value that decodes to nothing (such as `{}`), count as absent.
    fn take_field(object: &mut JsonObject, key: &str) -> Result<Option<Self>, FhirError> {
        match object.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => {
                let decoded = Self::from_json(value).map_err(|err| err.at(key))?;
                Ok((!decoded.is_empty()).then_some(decoded))
            }
        }
    }

    /// Writes the value under `key`, unless it is empty.
    fn put_field(&self, object: &mut JsonObject, key: &str) -> Result<(), FhirError> {
        if !self.is_empty() {
            object.insert(key.to_string(), self.to_json()?);
        }
        Ok(())
    }

    /// Removes the array property `key` and decodes every element of it.
    ///
    /// `null` and empty items are dropped, mirroring [`put_repeated`](FhirJson::put_repeated).
    fn take_repeated(object: &mut JsonObject, key: &str) -> Result<Vec<Self>, FhirError> {
        let Some(items) = take_array(object, key)? else {
            return Ok(Vec::new());
        };
        let mut decoded = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            if item.is_null() {
                continue;
            }
            let item = Self::from_json(item).map_err(|err| err.at_index(key, index))?;
            if !item.is_empty() {
                decoded.push(item);
            }
        }
        Ok(decoded)
    }

    /// Writes the non-empty items as an array under `key`; nothing at all if none remain.
    fn put_repeated(items: &[Self], object: &mut JsonObject, key: &str) -> Result<(), FhirError> {
        let encoded = items
            .iter()
            .filter(|item| !item.is_empty())
            .map(FhirJson::to_json)
            .collect::<Result<Vec<_>, _>>()?;
        if !encoded.is_empty() {
            object.insert(key.to_string(), Value::Array(encoded));
        }
        Ok(())
    }
}

/// A FHIR `[x]` choice element: a closed set of alternatives, each written under its
/// own type-suffixed key (`effectiveDateTime`, `effectivePeriod`, ...).
pub trait FhirChoice: Sized {
    /// The logical element name, e.g. `effective`.
    const FIELD: &'static str;
    /// Every sibling key, in declaration order.
    const KEYS: &'static [&'static str];

    /// Removes and decodes whichever sibling is present.
    ///
    /// Fails with [`FhirError::ConflictingChoice`] when two or more siblings are
    /// populated. `owner` names the type holding the field, for the error message.
    fn take_choice(object: &mut JsonObject, owner: &'static str) -> Result<Option<Self>, FhirError>;

    /// Writes the active alternative under its own key.
    fn put_choice(&self, object: &mut JsonObject) -> Result<(), FhirError>;

    /// The sibling key of the active alternative.
    fn key(&self) -> &'static str;

    fn is_empty(&self) -> bool;
}

/// A concrete resource type, identified on the wire by `resourceType`.
pub trait FhirResource: FhirJson {
    const RESOURCE_TYPE: &'static str;
}

pub fn expect_object(value: Value) -> Result<JsonObject, FhirError> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(FhirError::invalid_type("object", &other)),
    }
}

/// Removes an array property; `null` and a missing key are both `None`.
pub fn take_array(object: &mut JsonObject, key: &str) -> Result<Option<Vec<Value>>, FhirError> {
    match object.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(FhirError::invalid_type("array", &other).at(key)),
    }
}

/// Removes and checks the `resourceType` discriminator of a concrete resource.
pub fn take_resource_type(object: &mut JsonObject, expected: &'static str) -> Result<(), FhirError> {
    match object.remove("resourceType") {
        None | Some(Value::Null) => Err(FhirError::MissingResourceType),
        Some(Value::String(found)) if found == expected => Ok(()),
        Some(Value::String(found)) => Err(FhirError::ResourceTypeMismatch { expected, found }),
        Some(other) => Err(FhirError::invalid_type("string", &other).at("resourceType")),
    }
}

/// Reads the `resourceType` discriminator without removing it.
pub fn peek_resource_type(object: &JsonObject) -> Result<&str, FhirError> {
    match object.get("resourceType") {
        None | Some(Value::Null) => Err(FhirError::MissingResourceType),
        Some(Value::String(name)) => Ok(name),
        Some(other) => Err(FhirError::invalid_type("string", other).at("resourceType")),
    }
}

/// Scans the sibling keys of a choice element and returns the index of the one present.
///
/// A key counts as present when either it or its `_key` shadow holds a non-null value,
/// so a metadata-only primitive alternative is still selected.
pub fn select_choice(
    object: &JsonObject,
    owner: &'static str,
    field: &'static str,
    keys: &[&'static str],
) -> Result<Option<usize>, FhirError> {
    let is_set = |key: &str| object.get(key).is_some_and(|value| !value.is_null());

    let present: Vec<usize> = keys
        .iter()
        .enumerate()
        .filter(|(_, key)| is_set(key) || is_set(&format!("_{key}")))
        .map(|(index, _)| index)
        .collect();

    match present.as_slice() {
        [] => Ok(None),
        [index] => Ok(Some(*index)),
        _ => Err(FhirError::ConflictingChoice {
            type_name: owner,
            field,
            keys: present.iter().map(|&index| keys[index].to_string()).collect(),
        }),
    }
}

// === Leaf implementations ===

impl FhirJson for String {
    fn from_json(value: Value) -> Result<Self, FhirError> {
        match value {
            Value::String(text) => Ok(text),
            other => Err(FhirError::invalid_type("string", &other)),
        }
    }

    fn to_json(&self) -> Result<Value, FhirError> {
        Ok(Value::String(self.clone()))
    }

    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl FhirJson for bool {
    fn from_json(value: Value) -> Result<Self, FhirError> {
        match value {
            Value::Bool(flag) => Ok(flag),
            other => Err(FhirError::invalid_type("boolean", &other)),
        }
    }

    fn to_json(&self) -> Result<Value, FhirError> {
        Ok(Value::Bool(*self))
    }
}

macro_rules! impl_fhir_json_integer {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl FhirJson for $ty {
                fn from_json(value: Value) -> Result<Self, FhirError> {
                    let number = match value {
                        Value::Number(number) => number,
                        other => return Err(FhirError::invalid_type("number", &other)),
                    };
                    number
                        .as_i64()
                        .and_then(|wide| <$ty>::try_from(wide).ok())
                        .ok_or_else(|| FhirError::invalid_value($kind, number.to_string()))
                }

                fn to_json(&self) -> Result<Value, FhirError> {
                    Ok(Value::Number((*self).into()))
                }
            }
        )*
    };
}

impl_fhir_json_integer! {
    i32 => "integer",
    u32 => "unsignedInt",
}

impl<T: FhirJson> FhirJson for Box<T> {
    fn from_json(value: Value) -> Result<Self, FhirError> {
        T::from_json(value).map(Box::new)
    }

    fn to_json(&self) -> Result<Value, FhirError> {
        T::to_json(self)
    }

    fn is_empty(&self) -> bool {
        T::is_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        expect_object(value).unwrap()
    }

    #[test]
    fn select_choice_counts_shadow_only_keys() {
        let keys = &["effectiveDateTime", "effectivePeriod"];
        let obj = object(json!({"_effectiveDateTime": {"id": "a1"}}));
        assert_eq!(select_choice(&obj, "Observation", "effective", keys).unwrap(), Some(0));

        let obj = object(json!({"effectiveDateTime": null, "effectivePeriod": {"start": "2020"}}));
        assert_eq!(select_choice(&obj, "Observation", "effective", keys).unwrap(), Some(1));

        let obj = object(json!({"status": "final"}));
        assert_eq!(select_choice(&obj, "Observation", "effective", keys).unwrap(), None);
    }

    #[test]
    fn select_choice_rejects_two_siblings() {
        let keys = &["effectiveDateTime", "effectivePeriod"];
        let obj = object(json!({
            "effectiveDateTime": "2020-01-01",
            "effectivePeriod": {"start": "2020-01-01"}
        }));
        let err = select_choice(&obj, "Observation", "effective", keys).unwrap_err();
        match err {
            FhirError::ConflictingChoice { type_name, field, keys } => {
                assert_eq!(type_name, "Observation");
                assert_eq!(field, "effective");
                assert_eq!(keys, ["effectiveDateTime", "effectivePeriod"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn integers_are_range_checked() {
        assert_eq!(i32::from_json(json!(-7)).unwrap(), -7);
        assert!(matches!(
            u32::from_json(json!(-1)),
            Err(FhirError::InvalidValue { kind: "unsignedInt", .. })
        ));
        assert!(matches!(
            i32::from_json(json!(1.5)),
            Err(FhirError::InvalidValue { kind: "integer", .. })
        ));
        assert!(matches!(
            i32::from_json(json!("12")),
            Err(FhirError::InvalidType { expected: "number", found: "string" })
        ));
    }

    #[test]
    fn resource_type_is_checked() {
        let mut obj = object(json!({"resourceType": "Patient"}));
        assert!(take_resource_type(&mut obj, "Patient").is_ok());
        assert!(!obj.contains_key("resourceType"));

        let mut obj = object(json!({"resourceType": "Device"}));
        assert!(matches!(
            take_resource_type(&mut obj, "Patient"),
            Err(FhirError::ResourceTypeMismatch { expected: "Patient", .. })
        ));

        let mut obj = object(json!({}));
        assert!(matches!(
            take_resource_type(&mut obj, "Patient"),
            Err(FhirError::MissingResourceType)
        ));
    }

    #[test]
    fn repeated_fields_require_arrays() {
        let mut obj = object(json!({"line": "not an array"}));
        let err = String::take_repeated(&mut obj, "line").unwrap_err();
        assert_eq!(err.path(), Some("line"));
    }
}
