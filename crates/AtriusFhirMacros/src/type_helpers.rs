//=============================================================================
// Type Analysis Helper Functions
//=============================================================================

use syn::{GenericArgument, Path, PathArguments, Type, TypePath};

/// How a struct field maps onto its JSON property.
///
/// The generated code never looks at the element type itself; whether a type is a
/// primitive (and therefore has a `_name` shadow) is decided at runtime by that type's
/// `FhirJson` implementation. The macro only needs the wrapper shape.
pub(crate) enum FieldShape<'a> {
    /// `Option<T>`: absent when the property is missing.
    Optional(&'a Type),
    /// `Vec<T>`: an empty vector when the property is missing.
    Repeated(&'a Type),
    /// `T`: decoded to `T::default()` when the property is missing.
    Required(&'a Type),
}

/// Extracts the inner type from an `Option<T>` type.
///
/// # Examples
///
/// ```rust,ignore
/// // For type: Option<String>
/// // Returns: Some(String)
///
/// // For type: String
/// // Returns: None
/// ```
pub(crate) fn get_option_inner_type(ty: &Type) -> Option<&Type> {
    get_wrapper_inner_type(ty, "Option")
}

/// Extracts the inner type from a `Vec<T>` type.
pub(crate) fn get_vec_inner_type(ty: &Type) -> Option<&Type> {
    get_wrapper_inner_type(ty, "Vec")
}

fn get_wrapper_inner_type<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if let Type::Path(TypePath {
        path: Path { segments, .. },
        ..
    }) = ty
        && let Some(segment) = segments.last()
        && segment.ident == wrapper
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner_ty)) = args.args.first()
    {
        return Some(inner_ty);
    }
    None
}

/// Classifies a field type into one of the shapes the codec understands.
///
/// `Option<Vec<T>>` is rejected: repeated elements are always `Vec<T>`, so that an
/// empty array and a missing property decode to the same value.
pub(crate) fn get_field_shape(ty: &Type) -> FieldShape<'_> {
    if let Some(inner) = get_option_inner_type(ty) {
        if get_vec_inner_type(inner).is_some() {
            panic!("Option<Vec<T>> fields are not supported by FhirSerde, use Vec<T>");
        }
        FieldShape::Optional(inner)
    } else if let Some(inner) = get_vec_inner_type(ty) {
        FieldShape::Repeated(inner)
    } else {
        FieldShape::Required(ty)
    }
}
