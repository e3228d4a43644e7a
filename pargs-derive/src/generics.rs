use syn::{Generics, spanned::Spanned};

/// Targets are described by a single static field table, so they can't be
/// generic over anything.
pub fn reject_generics(generics: &Generics) -> syn::Result<()> {
    if let Some(param) = generics.const_params().next() {
        return Err(syn::Error::new(
            param.span(),
            "const generics aren't supported by `derive(Target)`",
        ));
    }

    if let Some(param) = generics.type_params().next() {
        return Err(syn::Error::new(
            param.span(),
            "generic types aren't supported by `derive(Target)`",
        ));
    }

    if let Some(param) = generics.lifetimes().next() {
        return Err(syn::Error::new(
            param.span(),
            "`derive(Target)` types can't borrow; field types must be owned",
        ));
    }

    Ok(())
}
