use proc_macro2::Span;
use quote::quote;
use syn::{Attribute, DataEnum, Fields, Ident, LitStr};

use crate::field_helpers::get_string_attribute;

/// Generates the `FhirChoice` implementation for a choice-type enum.
///
/// FHIR's `[x]` elements have one JSON property per allowed type. The enum carries
/// the base name in `#[fhir_choice_element(base_name = "value")]`, and each single-field
/// variant maps to the key given by its `rename`, or `<base><VariantName>` without one:
///
/// ```rust,ignore
/// #[derive(FhirSerde)]
/// #[fhir_choice_element(base_name = "value")]
/// pub enum ObservationValue {
///     #[fhir_serde(rename = "valueQuantity")]
///     Quantity(Quantity),
///     CodeableConcept(CodeableConcept), // "valueCodeableConcept"
/// }
/// ```
///
/// Variant types that are primitives also accept and emit their `_<key>` shadow
/// property, so `{"_valueString": {"extension": [...]}}` selects the `String` variant
/// with no value.
pub(crate) fn generate_choice_impl(
    name: &Ident,
    data: &DataEnum,
    attrs: &[Attribute],
) -> proc_macro2::TokenStream {
    let base = get_string_attribute(attrs, "fhir_choice_element", "base_name")
        .unwrap_or_else(|| {
            panic!(
                "choice enum `{}` needs #[fhir_choice_element(base_name = \"<element name>\")]",
                name
            )
        });

    let mut keys = Vec::new();
    let mut take_arms = Vec::new();
    let mut put_arms = Vec::new();
    let mut key_arms = Vec::new();
    let mut empty_arms = Vec::new();

    for (index, variant) in data.variants.iter().enumerate() {
        let variant_ident = &variant.ident;
        let variant_ty = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => panic!(
                "choice variant `{}::{}` must hold exactly one value",
                name, variant_ident
            ),
        };

        let key = get_string_attribute(&variant.attrs, "fhir_serde", "rename")
            .unwrap_or_else(|| format!("{}{}", base, variant_ident));
        let key_lit = LitStr::new(&key, Span::call_site());
        keys.push(key_lit.clone());

        take_arms.push(quote! {
            Some(#index) => Ok(
                <#variant_ty as atrius_fhir_r4::codec::FhirJson>::take_field(object, #key_lit)?
                    .map(Self::#variant_ident)
            ),
        });
        put_arms.push(quote! {
            Self::#variant_ident(value) => {
                atrius_fhir_r4::codec::FhirJson::put_field(value, object, #key_lit)
            }
        });
        key_arms.push(quote! {
            Self::#variant_ident(_) => #key_lit,
        });
        empty_arms.push(quote! {
            Self::#variant_ident(value) => atrius_fhir_r4::codec::FhirJson::is_empty(value),
        });
    }

    let name_str = name.to_string();

    quote! {
        impl atrius_fhir_r4::codec::FhirChoice for #name {
            const FIELD: &'static str = #base;
            const KEYS: &'static [&'static str] = &[#(#keys),*];

            fn take_choice(
                object: &mut atrius_fhir_r4::codec::JsonObject,
                owner: &'static str,
            ) -> ::std::result::Result<Option<Self>, atrius_fhir_r4::FhirError> {
                match atrius_fhir_r4::codec::select_choice(
                    object,
                    owner,
                    <Self as atrius_fhir_r4::codec::FhirChoice>::FIELD,
                    <Self as atrius_fhir_r4::codec::FhirChoice>::KEYS,
                )? {
                    #(#take_arms)*
                    _ => Ok(None),
                }
            }

            fn put_choice(
                &self,
                object: &mut atrius_fhir_r4::codec::JsonObject,
            ) -> ::std::result::Result<(), atrius_fhir_r4::FhirError> {
                match self {
                    #(#put_arms)*
                }
            }

            fn key(&self) -> &'static str {
                match self {
                    #(#key_arms)*
                }
            }

            fn is_empty(&self) -> bool {
                match self {
                    #(#empty_arms)*
                }
            }
        }

        impl atrius_fhir_r4::__private::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: atrius_fhir_r4::__private::serde::Serializer,
            {
                let mut object = atrius_fhir_r4::codec::JsonObject::new();
                atrius_fhir_r4::codec::FhirChoice::put_choice(self, &mut object)
                    .map_err(atrius_fhir_r4::__private::serde::ser::Error::custom)?;
                atrius_fhir_r4::__private::serde::Serialize::serialize(&object, serializer)
            }
        }

        impl<'de> atrius_fhir_r4::__private::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: atrius_fhir_r4::__private::serde::Deserializer<'de>,
            {
                let mut object = <atrius_fhir_r4::codec::JsonObject as atrius_fhir_r4::__private::serde::Deserialize>::deserialize(deserializer)?;
                match <Self as atrius_fhir_r4::codec::FhirChoice>::take_choice(&mut object, #name_str) {
                    Ok(Some(choice)) => Ok(choice),
                    Ok(None) => Err(atrius_fhir_r4::__private::serde::de::Error::custom(
                        format!(
                            "expected one of {:?}",
                            <Self as atrius_fhir_r4::codec::FhirChoice>::KEYS,
                        ),
                    )),
                    Err(err) => Err(atrius_fhir_r4::__private::serde::de::Error::custom(err)),
                }
            }
        }
    }
}
