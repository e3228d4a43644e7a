use darling::FromField;
use itertools::Itertools as _;
use lazy_format::lazy_format;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{Attribute, Ident, Index, LitStr, Member, Type, ext::IdentExt as _, spanned::Spanned as _};

#[derive(darling::FromField)]
#[darling(forward_attrs(pargs))]
pub struct RawField {
    ident: Option<Ident>,
    ty: Type,
    attrs: Vec<Attribute>,
}

/// A field of a target struct, with its `#[pargs("...")]` tag extracted. The
/// tag text itself is parsed at runtime, so that its errors are reported by
/// `pargs::parse`.
pub struct ParsedFieldInfo {
    pub name: String,
    pub member: Member,
    pub ty: Type,
    pub tag: Option<LitStr>,
}

impl ParsedFieldInfo {
    pub fn from_field(index: usize, field: &syn::Field) -> syn::Result<Self> {
        let raw = RawField::from_field(field)?;

        let (name, member) = match raw.ident {
            Some(ident) => (ident.unraw().to_string(), Member::Named(ident)),
            None => (index.to_string(), Member::Unnamed(Index::from(index))),
        };

        let tag = compute_tag(&raw.attrs, &name)?;

        Ok(Self {
            name,
            member,
            ty: raw.ty,
            tag,
        })
    }

    /// `pargs::FieldDecl::new(...)`, for the static field table
    pub fn decl(&self) -> impl ToTokens {
        let name = &self.name;
        let ty = &self.ty;
        let tag = match self.tag {
            Some(ref tag) => quote! { ::core::option::Option::Some(#tag) },
            None => quote! { ::core::option::Option::None },
        };

        quote! {
            ::pargs::FieldDecl::new(
                #name,
                #tag,
                <#ty as ::pargs::Field>::KIND,
            )
        }
    }

    /// The `field_mut` match arm for this field
    pub fn accessor_arm(&self, index: usize) -> TokenStream2 {
        let member = &self.member;

        quote! {
            #index => ::core::option::Option::Some(
                ::pargs::Field::slot(&mut self.#member)
            ),
        }
    }
}

fn compute_tag(attrs: &[Attribute], name: &str) -> syn::Result<Option<LitStr>> {
    let attr = attrs.iter().at_most_one().map_err(|mut attrs| {
        // at_most_one only fails with at least two attributes
        let first = attrs.next().map(|attr| attr.span());
        let second = attrs.next().map(|attr| attr.span());

        let mut err = syn::Error::new(
            second.unwrap_or_else(proc_macro2::Span::call_site),
            lazy_format!("duplicate #[pargs] attribute on field `{name}`"),
        );

        if let Some(first) = first {
            err.combine(syn::Error::new(first, "original use here"));
        }

        err
    })?;

    attr.map(|attr| {
        attr.parse_args::<LitStr>().map_err(|_| {
            syn::Error::new(
                attr.span(),
                r#"expected a tag string, like #[pargs("flag:v;verbose")]"#,
            )
        })
    })
    .transpose()
}
