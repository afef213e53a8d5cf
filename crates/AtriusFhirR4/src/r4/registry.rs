//! The `resourceType` -> decoder table behind [`Resource`] decoding.

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::{debug, warn};

use crate::codec::{FhirJson, FhirResource, expect_object, peek_resource_type};
use crate::error::FhirError;
use crate::r4::resource::{OpaqueResource, R4_DECODERS, decode_as};
use crate::r4::Resource;

/// Decodes a JSON object, known to carry a given `resourceType`, into a [`Resource`].
pub type ResourceDecoder = fn(Value) -> Result<Resource, FhirError>;

/// What to do with a `resourceType` the registry has no decoder for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownResourcePolicy {
    /// Fail with [`FhirError::UnknownResourceType`].
    #[default]
    Reject,
    /// Keep the object verbatim as [`Resource::Opaque`].
    Preserve,
}

static GLOBAL_REGISTRY: OnceCell<ResourceRegistry> = OnceCell::new();

/// Maps `resourceType` names to decoders.
///
/// One registry is active per process. It is built lazily with [`ResourceRegistry::r4`]
/// the first time a [`Resource`] is decoded, or installed explicitly at startup:
///
/// ```rust
/// use atrius_fhir_r4::r4::{ResourceRegistry, UnknownResourcePolicy};
///
/// let registry = ResourceRegistry::r4().with_unknown_policy(UnknownResourcePolicy::Preserve);
/// if registry.install().is_err() {
///     // another registry was already active
/// }
/// ```
///
/// After installation the registry is read-only, so decoding from many threads needs no
/// locking. A registry that is not installed can still decode top-level documents with
/// [`ResourceRegistry::decode`]; resources nested inside them (`contained`, bundle
/// entries) always go through the active registry.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    decoders: HashMap<&'static str, ResourceDecoder>,
    unknown_policy: UnknownResourcePolicy,
}

impl ResourceRegistry {
    /// A registry with no resource types at all.
    pub fn empty() -> Self {
        ResourceRegistry {
            decoders: HashMap::new(),
            unknown_policy: UnknownResourcePolicy::default(),
        }
    }

    /// A registry of every R4 resource type in this crate, rejecting unknown types.
    pub fn r4() -> Self {
        ResourceRegistry {
            decoders: R4_DECODERS.iter().copied().collect(),
            unknown_policy: UnknownResourcePolicy::default(),
        }
    }

    pub fn with_unknown_policy(mut self, policy: UnknownResourcePolicy) -> Self {
        self.unknown_policy = policy;
        self
    }

    pub fn unknown_policy(&self) -> UnknownResourcePolicy {
        self.unknown_policy
    }

    /// Adds or replaces the decoder for `resource_type`, returning the previous one.
    pub fn register(
        &mut self,
        resource_type: &'static str,
        decoder: ResourceDecoder,
    ) -> Option<ResourceDecoder> {
        debug!("Registering decoder for resourceType '{}'", resource_type);
        self.decoders.insert(resource_type, decoder)
    }

    /// Registers the concrete resource type `T` under its own name.
    pub fn register_type<T>(&mut self) -> Option<ResourceDecoder>
    where
        T: FhirResource,
        Resource: From<T>,
    {
        self.register(T::RESOURCE_TYPE, decode_as::<T>)
    }

    pub fn contains(&self, resource_type: &str) -> bool {
        self.decoders.contains_key(resource_type)
    }

    /// The registered resource type names, sorted.
    pub fn resource_types(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.decoders.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Makes this registry the process-wide one.
    ///
    /// Fails, handing the registry back, when a registry is already active, including
    /// the default one created by an earlier decode.
    pub fn install(self) -> Result<&'static ResourceRegistry, ResourceRegistry> {
        let mut pending = Some(self);
        let active = GLOBAL_REGISTRY.get_or_init(|| {
            let registry = pending.take().unwrap_or_else(ResourceRegistry::r4);
            debug!(
                "Installed resource registry with {} resource types, unknown policy {:?}",
                registry.decoders.len(),
                registry.unknown_policy
            );
            registry
        });
        match pending {
            None => Ok(active),
            Some(rejected) => {
                warn!("Resource registry already initialized; install() ignored");
                Err(rejected)
            }
        }
    }

    /// The process-wide registry, initialized with [`ResourceRegistry::r4`] on first use.
    pub fn global() -> &'static ResourceRegistry {
        GLOBAL_REGISTRY.get_or_init(|| {
            let registry = ResourceRegistry::r4();
            debug!(
                "Initialized default resource registry with {} resource types",
                registry.decoders.len()
            );
            registry
        })
    }

    /// Decodes any resource by dispatching on its `resourceType`.
    pub fn decode(&self, value: Value) -> Result<Resource, FhirError> {
        let object = expect_object(value)?;
        let lookup = {
            let resource_type = peek_resource_type(&object)?;
            self.decoders
                .get(resource_type)
                .copied()
                .ok_or_else(|| resource_type.to_string())
        };

        match lookup {
            Ok(decoder) => decoder(Value::Object(object)),
            Err(resource_type) => match self.unknown_policy {
                UnknownResourcePolicy::Reject => {
                    Err(FhirError::UnknownResourceType(resource_type))
                }
                UnknownResourcePolicy::Preserve => {
                    OpaqueResource::from_json(Value::Object(object)).map(Resource::Opaque)
                }
            },
        }
    }
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        ResourceRegistry::r4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::Patient;
    use serde_json::json;

    #[test]
    fn r4_registry_knows_the_catalogue() {
        let registry = ResourceRegistry::r4();
        assert!(registry.contains("Patient"));
        assert!(registry.contains("Specimen"));
        assert!(!registry.contains("Encounter"));
        assert_eq!(registry.resource_types().first(), Some(&"Basic"));
        assert_eq!(registry.unknown_policy(), UnknownResourcePolicy::Reject);
    }

    #[test]
    fn empty_registry_rejects_everything() {
        let registry = ResourceRegistry::empty();
        let err = registry
            .decode(json!({"resourceType": "Patient"}))
            .unwrap_err();
        assert!(matches!(err, FhirError::UnknownResourceType(name) if name == "Patient"));
    }

    #[test]
    fn register_type_adds_a_decoder() {
        let mut registry = ResourceRegistry::empty();
        assert!(registry.register_type::<Patient>().is_none());
        let resource = registry
            .decode(json!({"resourceType": "Patient", "active": false}))
            .unwrap();
        assert_eq!(resource.resource_type(), "Patient");
        assert!(registry.register_type::<Patient>().is_some());
    }
}
