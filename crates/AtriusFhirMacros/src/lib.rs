//! # FHIR Macro - Procedural Macros for the FHIR R4 JSON Codec
//!
//! This crate provides the `FhirSerde` derive that generates the JSON codec for every
//! type in the `atrius-fhir-r4` object model. The generated code targets the runtime
//! traits in `atrius_fhir_r4::codec` and never touches JSON details directly: each
//! field type knows how to take itself out of, and put itself into, a JSON object.
//!
//! ## FHIR Serialization Challenges
//!
//! FHIR has several unique serialization patterns that require special handling:
//!
//! ### Extension Pattern
//!
//! FHIR primitives can have associated metadata stored in a parallel `_fieldName` object:
//!
//! ```json
//! {
//!   "status": "active",
//!   "_status": {
//!     "id": "status-1",
//!     "extension": [...]
//!   }
//! }
//! ```
//!
//! ### Array Serialization
//!
//! Arrays of primitives are split into separate primitive and extension arrays:
//!
//! ```json
//! {
//!   "given": ["John", "Michael", null],
//!   "_given": [null, {"id": "name-2"}, {"extension": [...]}]
//! }
//! ```
//!
//! ### Choice Types
//!
//! FHIR's `[x]` fields are serialized as single key-value pairs with type suffixes:
//!
//! ```json
//! { "valueQuantity": {...} }  // for Quantity type
//! { "valueString": "text" }   // for String type
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use atrius_fhir_r4::FhirSerde;
//!
//! #[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
//! #[fhir_serde(resource)]
//! pub struct Observation {
//!     pub id: Option<Id>,
//!     #[fhir_serde(rename = "implicitRules")]
//!     pub implicit_rules: Option<Uri>,
//!     pub status: Option<Code>,     // Element<String, Extension>
//!     pub category: Vec<CodeableConcept>,
//!     #[fhir_serde(flatten)]
//!     pub value: Option<ObservationValue>,
//! }
//! ```

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput};

use crate::choice_impl::generate_choice_impl;
use crate::deserialize_impl::generate_deserialize_impl;
use crate::field_helpers::has_flag;
use crate::serialize_is_empty_impl::{generate_is_empty_impl, generate_serialize_impl};

pub(crate) mod choice_impl;
pub(crate) mod deserialize_impl;
pub(crate) mod field_helpers;
pub(crate) mod serialize_is_empty_impl;
pub(crate) mod type_helpers;

/// Derives the FHIR JSON codec for a struct or choice enum.
///
/// # Supported Attributes
///
/// On structs:
/// - `#[fhir_serde(resource)]` - The struct is a resource; its JSON carries a
///   `resourceType` equal to the struct name and `FhirResource` is implemented
///
/// On fields:
/// - `#[fhir_serde(rename = "name")]` - Overrides the camelCase JSON name
/// - `#[fhir_serde(flatten)]` - The `Option<Enum>` field is a `[x]` choice whose
///   members are written directly into the parent object
///
/// On enums:
/// - `#[fhir_choice_element(base_name = "value")]` - The enum is the set of
///   alternatives for the `value[x]` element
/// - `#[fhir_serde(rename = "valueString")]` on a variant overrides its key
///
/// # Generated Implementations
///
/// ## For Structs:
/// - `atrius_fhir_r4::codec::FhirJson` (decode, encode, emptiness)
/// - `atrius_fhir_r4::codec::FhirResource` for resources
/// - `serde::Serialize` / `serde::Deserialize` that route through the codec, so the
///   types work with any serde-based API
///
/// ## For Enums:
/// - `atrius_fhir_r4::codec::FhirChoice`
/// - `serde::Serialize` / `serde::Deserialize` as a single-entry object
///
/// # Field Shapes
///
/// | Rust type   | Missing property | JSON form |
/// |-------------|------------------|-----------|
/// | `Option<T>` | `None`           | `T`'s own |
/// | `Vec<T>`    | empty vector     | array     |
/// | `T`         | `T::default()`   | `T`'s own |
///
/// `Option<Vec<T>>` is rejected at compile time.
#[proc_macro_derive(FhirSerde, attributes(fhir_serde, fhir_choice_element))]
pub fn fhir_serde_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "FhirSerde does not support generic types")
            .to_compile_error()
            .into();
    }

    let expanded = match &input.data {
        Data::Struct(data) => {
            let is_resource = has_flag(&input.attrs, "resource");
            let resource_type = is_resource.then(|| name.to_string());

            let deserialize_impl =
                generate_deserialize_impl(&data.fields, name, resource_type.as_deref());
            let serialize_impl = generate_serialize_impl(&data.fields, resource_type.as_deref());
            let is_empty_impl = generate_is_empty_impl(&data.fields, is_resource);

            let resource_impl = resource_type.as_ref().map(|resource_type| {
                quote! {
                    impl atrius_fhir_r4::codec::FhirResource for #name {
                        const RESOURCE_TYPE: &'static str = #resource_type;
                    }
                }
            });

            quote! {
                impl atrius_fhir_r4::codec::FhirJson for #name {
                    fn from_json(
                        value: atrius_fhir_r4::__private::serde_json::Value,
                    ) -> ::std::result::Result<Self, atrius_fhir_r4::FhirError> {
                        #deserialize_impl
                    }

                    fn to_json(
                        &self,
                    ) -> ::std::result::Result<
                        atrius_fhir_r4::__private::serde_json::Value,
                        atrius_fhir_r4::FhirError,
                    > {
                        #serialize_impl
                    }

                    fn is_empty(&self) -> bool {
                        #is_empty_impl
                    }
                }

                #resource_impl

                // --- Serialize Implementation ---
                impl atrius_fhir_r4::__private::serde::Serialize for #name {
                    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
                    where
                        S: atrius_fhir_r4::__private::serde::Serializer,
                    {
                        let value = atrius_fhir_r4::codec::FhirJson::to_json(self)
                            .map_err(atrius_fhir_r4::__private::serde::ser::Error::custom)?;
                        atrius_fhir_r4::__private::serde::Serialize::serialize(&value, serializer)
                    }
                }

                // --- Deserialize Implementation ---
                impl<'de> atrius_fhir_r4::__private::serde::Deserialize<'de> for #name {
                    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
                    where
                        D: atrius_fhir_r4::__private::serde::Deserializer<'de>,
                    {
                        let value = <atrius_fhir_r4::__private::serde_json::Value as atrius_fhir_r4::__private::serde::Deserialize>::deserialize(deserializer)?;
                        <Self as atrius_fhir_r4::codec::FhirJson>::from_json(value)
                            .map_err(atrius_fhir_r4::__private::serde::de::Error::custom)
                    }
                }
            }
        }
        Data::Enum(data) => generate_choice_impl(name, data, &input.attrs),
        Data::Union(_) => panic!("FhirSerde derive macro does not support unions."),
    };

    TokenStream::from(expanded)
}
