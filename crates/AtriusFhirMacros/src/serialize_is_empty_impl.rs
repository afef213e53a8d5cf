//=============================================================================
// FhirSerde Implementation Generator Functions
//=============================================================================

use quote::quote;
use syn::Fields;

use crate::field_helpers::{get_effective_field_name, is_flattened};
use crate::type_helpers::{get_field_shape, FieldShape};

/// Generates the body of `FhirJson::to_json` for a FHIR struct.
///
/// Properties are written in field declaration order, which together with
/// `serde_json`'s `preserve_order` feature gives stable, FHIR-conventional output.
///
/// # FHIR-Specific Serialization
///
/// 1. **Element Extension Pattern**:
///    ```json
///    { "field": "value", "_field": {"id": "...", "extension": []} }
///    ```
///
/// 2. **Array Split Pattern**:
///    ```json
///    { "items": ["a", null, "c"], "_items": [null, {"id": "b"}, null] }
///    ```
///
/// 3. **Choice Type Pattern**:
///    ```json
///    { "valueString": "text" }  // not { "value": {"String": "text"} }
///    ```
///
/// Empty values are never written: `None`, empty vectors, and elements without a value,
/// id or extensions are skipped. Resources always start with their `resourceType`.
pub(crate) fn generate_serialize_impl(
    fields: &Fields,
    resource_type: Option<&str>,
) -> proc_macro2::TokenStream {
    let Fields::Named(named) = fields else {
        panic!("FhirSerde only supports structs with named fields");
    };

    let mut field_writes = Vec::new();
    for field in &named.named {
        let field_ident = field.ident.as_ref().expect("named field");
        let json_name = get_effective_field_name(field);

        let write = if is_flattened(field) {
            quote! {
                if let Some(choice) = &self.#field_ident {
                    atrius_fhir_r4::codec::FhirChoice::put_choice(choice, &mut object)?;
                }
            }
        } else {
            match get_field_shape(&field.ty) {
                FieldShape::Optional(_) => quote! {
                    if let Some(value) = &self.#field_ident {
                        atrius_fhir_r4::codec::FhirJson::put_field(value, &mut object, #json_name)?;
                    }
                },
                FieldShape::Repeated(inner_ty) => quote! {
                    <#inner_ty as atrius_fhir_r4::codec::FhirJson>::put_repeated(
                        &self.#field_ident,
                        &mut object,
                        #json_name,
                    )?;
                },
                FieldShape::Required(_) => quote! {
                    atrius_fhir_r4::codec::FhirJson::put_field(&self.#field_ident, &mut object, #json_name)?;
                },
            }
        };
        field_writes.push(write);
    }

    let resource_type_write = resource_type.map(|resource_type| {
        quote! {
            object.insert(
                "resourceType".to_string(),
                atrius_fhir_r4::__private::serde_json::Value::String(#resource_type.to_string()),
            );
        }
    });

    quote! {
        let mut object = atrius_fhir_r4::codec::JsonObject::new();
        #resource_type_write
        #(#field_writes)*
        Ok(atrius_fhir_r4::__private::serde_json::Value::Object(object))
    }
}

/// Generates the body of `FhirJson::is_empty` for a FHIR struct.
///
/// A data type is empty when every field is absent or itself empty; such values are
/// omitted from the output, matching FHIR's rule that JSON objects never appear empty.
/// Resources are never empty since they always carry their `resourceType`.
pub(crate) fn generate_is_empty_impl(
    fields: &Fields,
    is_resource: bool,
) -> proc_macro2::TokenStream {
    if is_resource {
        return quote! { false };
    }

    let Fields::Named(named) = fields else {
        panic!("FhirSerde only supports structs with named fields");
    };

    let checks: Vec<_> = named
        .named
        .iter()
        .map(|field| {
            let field_ident = field.ident.as_ref().expect("named field");
            if is_flattened(field) {
                return quote! {
                    self.#field_ident
                        .as_ref()
                        .is_none_or(atrius_fhir_r4::codec::FhirChoice::is_empty)
                };
            }
            match get_field_shape(&field.ty) {
                FieldShape::Optional(_) => quote! {
                    self.#field_ident
                        .as_ref()
                        .is_none_or(atrius_fhir_r4::codec::FhirJson::is_empty)
                },
                FieldShape::Repeated(_) => quote! {
                    self.#field_ident
                        .iter()
                        .all(atrius_fhir_r4::codec::FhirJson::is_empty)
                },
                FieldShape::Required(_) => quote! {
                    atrius_fhir_r4::codec::FhirJson::is_empty(&self.#field_ident)
                },
            }
        })
        .collect();

    if checks.is_empty() {
        quote! { true }
    } else {
        quote! { #(#checks)&&* }
    }
}
