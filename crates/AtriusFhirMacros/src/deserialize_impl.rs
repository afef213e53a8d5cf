use quote::quote;
use syn::{Fields, Ident};

use crate::field_helpers::{get_effective_field_name, is_flattened};
use crate::type_helpers::{get_field_shape, FieldShape};

/// Generates the body of `FhirJson::from_json` for a FHIR struct.
///
/// The generated code takes ownership of the incoming JSON object and pulls each
/// property out of it field by field. Every field type knows how to extract itself:
///
/// - **Primitives** (`Element<V, Extension>`) read both `name` and `_name` and reunite
///   the value with its id and extensions, including the positional pairing of
///   `name: [...]` with `_name: [...]`
/// - **Complex types** read `name` only
/// - **Choice fields** scan the candidate keys (`valueQuantity`, `valueString`, ...)
///   and fail when more than one is present
///
/// Properties that are not consumed by any field are ignored.
///
/// # FHIR-Specific Deserialization
///
/// ```json
/// // Input: { "status": "final", "_status": {"id": "s1"} }
/// // Creates: Element { id: None, extension: [], value: Some("final") } with id "s1"
/// ```
///
/// # Resources
///
/// When `resource_type` is given, the generated code first checks the `resourceType`
/// discriminator and then prefixes any field error path with the resource type, so
/// a failure deep inside an Observation reports `Observation.component[1].valueQuantity.value`.
///
/// # Arguments
///
/// * `fields` - The named fields of the struct
/// * `name` - The type name being generated for
/// * `resource_type` - The `resourceType` value for resources, `None` for data types
///
/// # Returns
///
/// TokenStream containing the complete `from_json` method body.
pub(crate) fn generate_deserialize_impl(
    fields: &Fields,
    name: &Ident,
    resource_type: Option<&str>,
) -> proc_macro2::TokenStream {
    let Fields::Named(named) = fields else {
        panic!("FhirSerde only supports structs with named fields");
    };

    let mut field_inits = Vec::new();
    for field in &named.named {
        let field_ident = field.ident.as_ref().expect("named field");
        let json_name = get_effective_field_name(field);
        let shape = get_field_shape(&field.ty);

        let init = if is_flattened(field) {
            let FieldShape::Optional(choice_ty) = shape else {
                panic!("choice field `{}` must be declared as Option<T>", field_ident);
            };
            // Errors inside a choice are attributed to the owning type by name.
            let owner = name.to_string();
            quote! {
                <#choice_ty as atrius_fhir_r4::codec::FhirChoice>::take_choice(object, #owner)?
            }
        } else {
            match shape {
                FieldShape::Optional(inner_ty) => quote! {
                    <#inner_ty as atrius_fhir_r4::codec::FhirJson>::take_field(object, #json_name)?
                },
                FieldShape::Repeated(inner_ty) => quote! {
                    <#inner_ty as atrius_fhir_r4::codec::FhirJson>::take_repeated(object, #json_name)?
                },
                FieldShape::Required(ty) => quote! {
                    <#ty as atrius_fhir_r4::codec::FhirJson>::take_field(object, #json_name)?
                        .unwrap_or_default()
                },
            }
        };

        field_inits.push(quote! { #field_ident: #init });
    }

    let (resource_type_check, finish) = match resource_type {
        Some(resource_type) => (
            quote! {
                atrius_fhir_r4::codec::take_resource_type(&mut object, #resource_type)?;
            },
            quote! {
                decode_fields(&mut object).map_err(|err| err.within(#resource_type))
            },
        ),
        None => (quote! {}, quote! { decode_fields(&mut object) }),
    };

    quote! {
        let mut object = atrius_fhir_r4::codec::expect_object(value)?;
        #resource_type_check

        fn decode_fields(
            object: &mut atrius_fhir_r4::codec::JsonObject,
        ) -> ::std::result::Result<#name, atrius_fhir_r4::FhirError> {
            Ok(#name {
                #(#field_inits,)*
            })
        }

        #finish
    }
}
