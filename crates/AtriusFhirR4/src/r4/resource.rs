use chrono::{DateTime as ChronoDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::{FhirJson, FhirResource, JsonObject, expect_object, peek_resource_type};
use crate::error::FhirError;
use crate::r4::registry::{ResourceDecoder, ResourceRegistry};
use crate::r4::{
    Basic, Binary, Bundle, Condition, Device, Observation, Organization, Parameters, Patient,
    Procedure, Specimen,
};

/// A resource whose `resourceType` is not part of this crate's catalogue.
///
/// Produced only when the active [`ResourceRegistry`] uses
/// [`UnknownResourcePolicy::Preserve`](crate::r4::UnknownResourcePolicy::Preserve).
/// The properties are kept verbatim, so re-encoding reproduces the input.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueResource {
    pub resource_type: String,
    /// Every property of the resource except `resourceType`, in document order.
    pub content: JsonObject,
}

impl OpaqueResource {
    pub fn new(resource_type: impl Into<String>, content: JsonObject) -> Self {
        OpaqueResource {
            resource_type: resource_type.into(),
            content,
        }
    }
}

impl FhirJson for OpaqueResource {
    fn from_json(value: Value) -> Result<Self, FhirError> {
        let mut content = expect_object(value)?;
        let resource_type = peek_resource_type(&content)?.to_string();
        content.remove("resourceType");
        Ok(OpaqueResource {
            resource_type,
            content,
        })
    }

    fn to_json(&self) -> Result<Value, FhirError> {
        let mut object = JsonObject::with_capacity(self.content.len() + 1);
        object.insert(
            "resourceType".to_string(),
            Value::String(self.resource_type.clone()),
        );
        for (key, value) in &self.content {
            if key != "resourceType" {
                object.insert(key.clone(), value.clone());
            }
        }
        Ok(Value::Object(object))
    }
}

/// Decodes a JSON object as the concrete resource `T` and wraps it in [`Resource`].
///
/// Every entry of the R4 registry is an instantiation of this function.
pub fn decode_as<T>(value: Value) -> Result<Resource, FhirError>
where
    T: FhirResource,
    Resource: From<T>,
{
    T::from_json(value).map(Resource::from)
}

macro_rules! resource_enum {
    ($($name:ident),* $(,)?) => {
        /// Any FHIR R4 resource, selected by its `resourceType`.
        ///
        /// This is the type of every "any resource" position in the model: `contained`,
        /// `Bundle.entry.resource` and `Parameters.parameter.resource`. Decoding looks up
        /// the discriminator in [`ResourceRegistry::global`]; encoding writes
        /// `resourceType` first, followed by the concrete resource's fields.
        ///
        /// Variants are boxed so that deeply nested bundles and contained resources keep
        /// a small footprint on the stack.
        #[derive(Debug, Clone)]
        pub enum Resource {
            $(
                $name(Box<$name>),
            )*
            /// A resource type unknown to the registry, kept verbatim.
            Opaque(OpaqueResource),
        }

        // Manual PartialEq implementation to break MIR optimization cycle with Bundle
        impl PartialEq for Resource {
            #[inline(never)]
            fn eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $(
                        (Self::$name(a), Self::$name(b)) => a == b,
                    )*
                    (Self::Opaque(a), Self::Opaque(b)) => a == b,
                    _ => false,
                }
            }
        }

        impl Resource {
            /// Returns the resource type name, as written in the `resourceType` property.
            pub fn resource_type(&self) -> &str {
                match self {
                    $(
                        Self::$name(_) => <$name as FhirResource>::RESOURCE_TYPE,
                    )*
                    Self::Opaque(opaque) => &opaque.resource_type,
                }
            }

            /// Returns the logical id of the resource, if it has one.
            pub fn id(&self) -> Option<&str> {
                match self {
                    $(
                        Self::$name(resource) => {
                            resource.id.as_ref().and_then(|id| id.value.as_deref())
                        }
                    )*
                    Self::Opaque(opaque) => opaque.content.get("id").and_then(Value::as_str),
                }
            }

            /// Returns the lastUpdated timestamp from the resource's metadata if available.
            pub fn last_updated(&self) -> Option<ChronoDateTime<Utc>> {
                let meta = match self {
                    $(
                        Self::$name(resource) => resource.meta.as_ref(),
                    )*
                    Self::Opaque(_) => None,
                };
                meta?.last_updated.as_ref()?.value.as_ref()?.to_chrono_datetime()
            }

            fn encode(&self) -> Result<Value, FhirError> {
                match self {
                    $(
                        Self::$name(resource) => resource.to_json(),
                    )*
                    Self::Opaque(opaque) => opaque.to_json(),
                }
            }
        }

        $(
            impl From<$name> for Resource {
                fn from(resource: $name) -> Self {
                    Resource::$name(Box::new(resource))
                }
            }
        )*

        /// Decoders for every resource type in the catalogue.
        pub(crate) const R4_DECODERS: &[(&str, ResourceDecoder)] = &[
            $(
                (<$name as FhirResource>::RESOURCE_TYPE, decode_as::<$name> as ResourceDecoder),
            )*
        ];
    };
}

resource_enum! {
    Basic,
    Binary,
    Bundle,
    Condition,
    Device,
    Observation,
    Organization,
    Parameters,
    Patient,
    Procedure,
    Specimen,
}

impl From<OpaqueResource> for Resource {
    fn from(opaque: OpaqueResource) -> Self {
        Resource::Opaque(opaque)
    }
}

impl FhirJson for Resource {
    fn from_json(value: Value) -> Result<Self, FhirError> {
        ResourceRegistry::global().decode(value)
    }

    fn to_json(&self) -> Result<Value, FhirError> {
        self.encode()
    }
}

impl Serialize for Resource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.to_json().map_err(serde::ser::Error::custom)?;
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Resource::from_json(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_type_names_match_variants() {
        let patient = Resource::from(Patient::default());
        assert_eq!(patient.resource_type(), "Patient");

        let opaque = Resource::from(OpaqueResource::new("MyCustomThing", JsonObject::new()));
        assert_eq!(opaque.resource_type(), "MyCustomThing");
    }

    #[test]
    fn decoder_table_covers_the_catalogue() {
        let names: Vec<&str> = R4_DECODERS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), 11);
        assert!(names.contains(&"Observation"));
        assert!(names.contains(&"Bundle"));
    }

    #[test]
    fn opaque_resource_writes_resource_type_first() {
        let opaque = OpaqueResource::from_json(json!({
            "id": "x1",
            "resourceType": "MyCustomThing",
            "custom": [1, 2]
        }))
        .unwrap();
        assert_eq!(opaque.resource_type, "MyCustomThing");
        assert!(!opaque.content.contains_key("resourceType"));

        let encoded = opaque.to_json().unwrap();
        let keys: Vec<&String> = encoded.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["resourceType", "id", "custom"]);
    }

    #[test]
    fn id_and_last_updated_are_read_from_the_resource() {
        let resource = Resource::from_json(json!({
            "resourceType": "Device",
            "id": "dev-1",
            "meta": {"lastUpdated": "2023-05-01T10:00:00Z"}
        }))
        .unwrap();
        assert_eq!(resource.id(), Some("dev-1"));
        let updated = resource.last_updated().unwrap();
        assert_eq!(updated.to_rfc3339(), "2023-05-01T10:00:00+00:00");
    }
}
