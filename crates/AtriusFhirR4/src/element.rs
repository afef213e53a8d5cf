use serde_json::Value;

use crate::codec::{expect_object, take_array, FhirJson, JsonObject};
use crate::error::FhirError;

/// Generic element container supporting FHIR's primitive extension mechanism.
///
/// In FHIR, most primitive elements can be extended with additional metadata
/// through the `id` and `extension` fields. This container bundles the value with that
/// metadata in memory; on the wire the two halves live in sibling properties, and the
/// split happens only inside the codec.
///
/// # Type Parameters
///
/// * `V` - The value type (e.g., `String`, `i32`, `PreciseDecimal`)
/// * `E` - The extension type (the model's `Extension` struct)
///
/// # FHIR Element Structure
///
/// A primitive field `name` appears as:
/// 1. **Primitive value**: `"name": "text"`
/// 2. **Extended primitive**: `"name": "text", "_name": {"id": "n1", "extension": [...]}`
/// 3. **Extension-only**: `"_name": {"extension": [...]}` (no value)
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_r4::r4::{Extension, String};
///
/// // Simple primitive value
/// let simple: String = "Hello World".into();
/// assert_eq!(simple.value.as_deref(), Some("Hello World"));
///
/// // Extension-only element (no value)
/// let extension_only = String {
///     id: None,
///     extension: vec![Extension {
///         url: "http://example.org/fhir/StructureDefinition/reason".to_string(),
///         ..Default::default()
///     }],
///     value: None,
/// };
/// assert!(extension_only.has_metadata());
///
/// // Extensions with no content are not metadata
/// let blank = String {
///     extension: vec![Extension::default()],
///     ..Default::default()
/// };
/// assert!(blank.is_empty());
/// ```
///
/// # Serialization Behavior
///
/// - `value` is written under the field's key when present
/// - `id`/`extension` are written under `_` + key when either is present
/// - An element with none of the three is not written at all
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Element<V, E> {
    /// Optional element identifier for referencing within the resource
    pub id: Option<String>,
    /// Extensions providing additional metadata
    pub extension: Vec<E>,
    /// The actual primitive value
    pub value: Option<V>,
}

impl<V, E> Default for Element<V, E> {
    fn default() -> Self {
        Element {
            id: None,
            extension: Vec::new(),
            value: None,
        }
    }
}

impl<V, E> Element<V, E> {
    pub fn new(value: V) -> Self {
        Element {
            value: Some(value),
            ..Element::default()
        }
    }
}

impl<V, E: FhirJson> Element<V, E> {
    /// Returns `true` if no value, id, or non-empty extension is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && !self.has_metadata()
    }

    /// Returns `true` if the element carries an id or at least one non-empty extension.
    #[inline]
    pub fn has_metadata(&self) -> bool {
        self.id.is_some() || self.extension.iter().any(|extension| !extension.is_empty())
    }
}

impl<V, E> From<V> for Element<V, E> {
    fn from(value: V) -> Self {
        Element::new(value)
    }
}

impl<E> From<&str> for Element<String, E> {
    fn from(value: &str) -> Self {
        Element::new(value.to_string())
    }
}

fn shadow_key(key: &str) -> String {
    format!("_{key}")
}

impl<V: FhirJson, E: FhirJson> Element<V, E> {
    /// Decodes the contents of a `_name` object.
    fn decode_metadata(value: Value) -> Result<(Option<String>, Vec<E>), FhirError> {
        let mut object = expect_object(value)?;
        let id = String::take_field(&mut object, "id")?;
        let extension = E::take_repeated(&mut object, "extension")?;
        Ok((id, extension))
    }

    fn encode_metadata(&self) -> Result<Value, FhirError> {
        let mut object = JsonObject::new();
        if let Some(id) = &self.id {
            id.put_field(&mut object, "id")?;
        }
        E::put_repeated(&self.extension, &mut object, "extension")?;
        Ok(Value::Object(object))
    }

    /// Combines a primary value slot and a shadow slot into one element.
    ///
    /// Either slot may be absent; `None` is returned only when both are.
    fn merge(
        value: Option<Value>,
        shadow: Option<Value>,
        key: &str,
        shadow_key: &str,
    ) -> Result<Option<Self>, FhirError> {
        if value.is_none() && shadow.is_none() {
            return Ok(None);
        }
        let mut element = Element::default();
        if let Some(value) = value {
            element.value = Some(V::from_json(value).map_err(|err| err.at(key))?);
        }
        if let Some(shadow) = shadow {
            let (id, extension) = Self::decode_metadata(shadow).map_err(|err| err.at(shadow_key))?;
            element.id = id;
            element.extension = extension;
        }
        Ok(Some(element))
    }
}

/// The shadow-element codec.
///
/// `from_json`/`to_json` handle only the bare value, for contexts where no shadow
/// property exists. The field-level methods pair `name` with `_name`.
impl<V: FhirJson, E: FhirJson> FhirJson for Element<V, E> {
    fn from_json(value: Value) -> Result<Self, FhirError> {
        V::from_json(value).map(Element::new)
    }

    fn to_json(&self) -> Result<Value, FhirError> {
        match &self.value {
            Some(value) => value.to_json(),
            None => Ok(Value::Null),
        }
    }

    fn is_empty(&self) -> bool {
        Element::is_empty(self)
    }

    fn take_field(object: &mut JsonObject, key: &str) -> Result<Option<Self>, FhirError> {
        let shadow_key = shadow_key(key);
        let value = object.remove(key).filter(|value| !value.is_null());
        let shadow = object.remove(&shadow_key).filter(|value| !value.is_null());
        let element = Self::merge(value, shadow, key, &shadow_key)?;
        Ok(element.filter(|element| !Element::is_empty(element)))
    }

    fn put_field(&self, object: &mut JsonObject, key: &str) -> Result<(), FhirError> {
        if let Some(value) = &self.value {
            object.insert(key.to_string(), value.to_json()?);
        }
        if self.has_metadata() {
            object.insert(shadow_key(key), self.encode_metadata()?);
        }
        Ok(())
    }

    /// Re-zips `name: [...]` and `_name: [...]` by position.
    ///
    /// The arrays may differ in length; the result is as long as the longer one, and
    /// positions where both are `null` survive as empty elements so that a re-encode
    /// reproduces the same alignment.
    fn take_repeated(object: &mut JsonObject, key: &str) -> Result<Vec<Self>, FhirError> {
        let shadow_key = shadow_key(key);
        let values = take_array(object, key)?.unwrap_or_default();
        let shadows = take_array(object, &shadow_key)?.unwrap_or_default();

        let len = values.len().max(shadows.len());
        let mut values = values.into_iter();
        let mut shadows = shadows.into_iter();

        let mut elements = Vec::with_capacity(len);
        for index in 0..len {
            let value = values.next().filter(|value| !value.is_null());
            let shadow = shadows.next().filter(|value| !value.is_null());
            let element = Self::merge(value, shadow, &format!("{key}[{index}]"), &format!("{shadow_key}[{index}]"))?
                .unwrap_or_default();
            elements.push(element);
        }
        Ok(elements)
    }

    /// Splits the elements into `name: [...]` and `_name: [...]`.
    ///
    /// The value array is written only if some element has a value, the shadow array
    /// only if some element has metadata; both always span every element, with `null`
    /// where a position has nothing to say.
    fn put_repeated(items: &[Self], object: &mut JsonObject, key: &str) -> Result<(), FhirError> {
        if items.iter().any(|item| item.value.is_some()) {
            let values = items
                .iter()
                .map(FhirJson::to_json)
                .collect::<Result<Vec<_>, _>>()?;
            object.insert(key.to_string(), Value::Array(values));
        }
        if items.iter().any(Element::has_metadata) {
            let shadows = items
                .iter()
                .map(|item| {
                    if item.has_metadata() {
                        item.encode_metadata()
                    } else {
                        Ok(Value::Null)
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            object.insert(shadow_key(key), Value::Array(shadows));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // A stand-in extension type keeps these tests independent of the model.
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    struct Ext {
        url: String,
    }

    impl FhirJson for Ext {
        fn from_json(value: Value) -> Result<Self, FhirError> {
            let mut object = expect_object(value)?;
            Ok(Ext {
                url: String::take_field(&mut object, "url")?.unwrap_or_default(),
            })
        }

        fn to_json(&self) -> Result<Value, FhirError> {
            Ok(json!({ "url": self.url }))
        }

        fn is_empty(&self) -> bool {
            self.url.is_empty()
        }
    }

    type Text = Element<String, Ext>;

    fn ext(url: &str) -> Ext {
        Ext { url: url.to_string() }
    }

    fn object(value: Value) -> JsonObject {
        expect_object(value).unwrap()
    }

    #[test]
    fn value_and_shadow_are_merged() {
        let mut obj = object(json!({
            "status": "final",
            "_status": {"id": "s1", "extension": [{"url": "http://example.org/a"}]}
        }));
        let element = Text::take_field(&mut obj, "status").unwrap().unwrap();
        assert_eq!(element.value.as_deref(), Some("final"));
        assert_eq!(element.id.as_deref(), Some("s1"));
        assert_eq!(element.extension, vec![ext("http://example.org/a")]);
        assert!(obj.is_empty());
    }

    #[test]
    fn shadow_only_element_is_materialized() {
        let mut obj = object(json!({"_status": {"extension": [{"url": "u"}]}}));
        let element = Text::take_field(&mut obj, "status").unwrap().unwrap();
        assert_eq!(element.value, None);
        assert_eq!(element.extension, vec![ext("u")]);
    }

    #[test]
    fn null_slots_are_absent() {
        let mut obj = object(json!({"status": null, "_status": null}));
        assert_eq!(Text::take_field(&mut obj, "status").unwrap(), None);
    }

    #[test]
    fn empty_shadow_is_absent() {
        let mut obj = object(json!({"_status": {}, "_code": {"extension": [{}]}}));
        assert_eq!(Text::take_field(&mut obj, "status").unwrap(), None);
        assert_eq!(Text::take_field(&mut obj, "code").unwrap(), None);
        assert!(obj.is_empty());
    }

    #[test]
    fn blank_extensions_write_no_shadow() {
        let blank = Text {
            extension: vec![Ext::default()],
            ..Text::from("a")
        };
        assert!(!blank.has_metadata());

        let mut obj = JsonObject::new();
        blank.put_field(&mut obj, "status").unwrap();
        assert_eq!(Value::Object(obj), json!({"status": "a"}));

        let mut obj = JsonObject::new();
        Text::put_repeated(&[blank, Text::from("b")], &mut obj, "given").unwrap();
        assert_eq!(Value::Object(obj), json!({"given": ["a", "b"]}));
    }

    #[test]
    fn empty_element_writes_nothing() {
        let mut obj = JsonObject::new();
        Text::default().put_field(&mut obj, "status").unwrap();
        assert!(obj.is_empty());
    }

    #[test]
    fn repeated_shadow_stays_aligned() {
        let items = vec![
            Text::from("a"),
            Text {
                id: Some("b1".into()),
                ..Text::from("b")
            },
            Text::from("c"),
        ];
        let mut obj = JsonObject::new();
        Text::put_repeated(&items, &mut obj, "given").unwrap();
        assert_eq!(
            Value::Object(obj.clone()),
            json!({"given": ["a", "b", "c"], "_given": [null, {"id": "b1"}, null]})
        );

        let decoded = Text::take_repeated(&mut obj, "given").unwrap();
        assert_eq!(decoded, items);
    }

    #[test]
    fn longer_shadow_array_extends_the_values() {
        let mut obj = object(json!({
            "given": ["a"],
            "_given": [null, {"extension": [{"url": "u"}]}]
        }));
        let decoded = Text::take_repeated(&mut obj, "given").unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].value.as_deref(), Some("a"));
        assert_eq!(decoded[1].value, None);
        assert_eq!(decoded[1].extension, vec![ext("u")]);
    }

    #[test]
    fn metadata_only_list_omits_value_array() {
        let items = vec![
            Text::default(),
            Text {
                id: Some("x".into()),
                ..Text::default()
            },
        ];
        let mut obj = JsonObject::new();
        Text::put_repeated(&items, &mut obj, "line").unwrap();
        assert_eq!(Value::Object(obj), json!({"_line": [null, {"id": "x"}]}));
    }

    #[test]
    fn errors_name_the_position() {
        let mut obj = object(json!({"given": ["a", 7]}));
        let err = Text::take_repeated(&mut obj, "given").unwrap_err();
        assert_eq!(err.path(), Some("given[1]"));

        let mut obj = object(json!({"_status": {"id": 3}}));
        let err = Text::take_field(&mut obj, "status").unwrap_err();
        assert_eq!(err.path(), Some("_status.id"));
    }
}
