use itertools::Itertools as _;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Fields, Ident, spanned::Spanned as _};

use crate::common::ParsedFieldInfo;
use crate::generics::reject_generics;

pub fn derive_target_result(item: TokenStream2) -> syn::Result<TokenStream2> {
    let input: DeriveInput = syn::parse2(item)?;
    reject_generics(&input.generics)?;

    match input.data {
        syn::Data::Struct(ref data) => derive_target_struct(&input.ident, &data.fields),
        syn::Data::Enum(_) => Ok(derive_target_other(&input.ident, "enum")),
        syn::Data::Union(_) => Err(syn::Error::new(
            input.span(),
            "can't derive `Target` on a union",
        )),
    }
}

fn derive_target_struct(name: &Ident, fields: &Fields) -> syn::Result<TokenStream2> {
    let fields: Vec<ParsedFieldInfo> = fields
        .iter()
        .enumerate()
        .map(|(index, field)| ParsedFieldInfo::from_field(index, field))
        .try_collect()?;

    let decls = fields.iter().map(|field| field.decl());
    let arms = fields
        .iter()
        .enumerate()
        .map(|(index, field)| field.accessor_arm(index));

    Ok(quote! {
        impl ::pargs::Target for #name {
            fn shape() -> ::pargs::Shape {
                const FIELDS: &[::pargs::FieldDecl] = &[#(#decls,)*];

                ::pargs::Shape::Struct(FIELDS)
            }

            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<::pargs::FieldSlot<'_>> {
                match index {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

/// Types that aren't structs still implement `Target`, so that binding into
/// them is reported at runtime.
fn derive_target_other(name: &Ident, what: &str) -> TokenStream2 {
    quote! {
        impl ::pargs::Target for #name {
            fn shape() -> ::pargs::Shape {
                ::pargs::Shape::Other(#what)
            }

            fn field_mut(
                &mut self,
                _index: usize,
            ) -> ::core::option::Option<::pargs::FieldSlot<'_>> {
                ::core::option::Option::None
            }
        }
    }
}
