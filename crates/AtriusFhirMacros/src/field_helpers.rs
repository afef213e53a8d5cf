use heck::ToLowerCamelCase;
use syn::{token, Attribute, Lit, Meta};
use syn::punctuated::Punctuated;

/// Returns every `key = value` / `flag` entry of the `#[<attr_name>(...)]` attributes.
fn attribute_metas(attrs: &[Attribute], attr_name: &str) -> Vec<Meta> {
    let mut metas = Vec::new();
    for attr in attrs {
        if attr.path().is_ident(attr_name)
            && let Ok(list) =
            attr.parse_args_with(Punctuated::<Meta, token::Comma>::parse_terminated)
        {
            metas.extend(list);
        }
    }
    metas
}

/// Looks up `#[<attr_name>(<name> = "...")]` and returns the string literal.
pub(crate) fn get_string_attribute(
    attrs: &[Attribute],
    attr_name: &str,
    name: &str,
) -> Option<String> {
    for meta in attribute_metas(attrs, attr_name) {
        if let Meta::NameValue(nv) = meta
            && nv.path.is_ident(name)
            && let syn::Expr::Lit(expr_lit) = nv.value
            && let Lit::Str(lit_str) = expr_lit.lit
        {
            return Some(lit_str.value());
        }
    }
    None
}

/// Checks for a bare `#[fhir_serde(<name>)]` flag.
pub(crate) fn has_flag(attrs: &[Attribute], name: &str) -> bool {
    attribute_metas(attrs, "fhir_serde")
        .iter()
        .any(|meta| matches!(meta, Meta::Path(path) if path.is_ident(name)))
}

/// Determines the effective field name for FHIR serialization.
///
/// This function extracts the field name that should be used during JSON serialization,
/// respecting FHIR naming conventions and custom rename attributes.
///
/// # Attribute Processing
///
/// - If `#[fhir_serde(rename = "customName")]` is present, uses the custom name
/// - Otherwise, converts the Rust field name from `snake_case` to `camelCase`, dropping
///   the `r#` prefix of raw identifiers such as `r#type`
///
/// # Examples
///
/// ```rust,ignore
/// // Field: pub implicit_rules: Option<Uri>
/// // Result: "implicitRules" (camelCase conversion)
///
/// // Field: pub r#use: Option<Code>
/// // Result: "use"
/// ```
pub(crate) fn get_effective_field_name(field: &syn::Field) -> String {
    if let Some(rename) = get_string_attribute(&field.attrs, "fhir_serde", "rename") {
        return rename;
    }
    let ident = field
        .ident
        .as_ref()
        .expect("FhirSerde only supports named fields")
        .to_string();
    ident
        .strip_prefix("r#")
        .unwrap_or(&ident)
        .to_lower_camel_case()
}

/// Checks if a field should be flattened into its parent (`#[fhir_serde(flatten)]`).
///
/// Only choice fields are flattened: they have no JSON property of their own, and the
/// enum's members are written as type-suffixed siblings (`valueQuantity`,
/// `valueString`, ...) directly into the parent object.
///
/// ```rust,ignore
/// #[fhir_serde(flatten)]
/// pub effective: Option<ObservationEffective>,
/// ```
pub(crate) fn is_flattened(field: &syn::Field) -> bool {
    has_flag(&field.attrs, "flatten")
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{parse_quote, Fields, ItemStruct};

    fn fields(item: ItemStruct) -> Vec<syn::Field> {
        match item.fields {
            Fields::Named(named) => named.named.into_iter().collect(),
            _ => unreachable!(),
        }
    }

    #[test]
    fn field_names_follow_fhir_conventions() {
        let item: ItemStruct = parse_quote! {
            struct Sample {
                implicit_rules: Option<Uri>,
                r#type: Option<Code>,
                #[fhir_serde(rename = "modifierExtension")]
                modifiers: Vec<Extension>,
                #[fhir_serde(flatten)]
                effective: Option<SampleEffective>,
            }
        };
        let fields = fields(item);
        let names: Vec<String> = fields.iter().map(get_effective_field_name).collect();
        assert_eq!(names, ["implicitRules", "type", "modifierExtension", "effective"]);
        assert!(!is_flattened(&fields[0]));
        assert!(is_flattened(&fields[3]));
    }

    #[test]
    fn reads_container_attributes() {
        let item: ItemStruct = parse_quote! {
            #[fhir_serde(resource)]
            #[fhir_choice_element(base_name = "value")]
            struct Sample {}
        };
        assert!(has_flag(&item.attrs, "resource"));
        assert!(!has_flag(&item.attrs, "base_name"));
        assert_eq!(
            get_string_attribute(&item.attrs, "fhir_choice_element", "base_name").as_deref(),
            Some("value")
        );
    }
}
