//! Macro `#[derive(Relocate)]` for element types of `relovec` vectors.
//!
//! See [`relovec` crate](https://docs.rs/relovec).

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_quote, Data, DeriveInput, Fields, GenericParam, Index, Member};

/// Derives `relovec::Relocate` by relocating every field in declaration order.
///
/// Each type parameter of the struct gets a `Relocate` bound. Every field's type must
/// implement `Relocate`; a moved-from value of the struct is the struct of moved-from
/// fields.
///
/// # Examples
///
/// Structs with named fields:
///
/// ```
/// use relovec::prelude::*;
///
/// #[derive(Relocate, Debug, PartialEq)]
/// struct Entry {
///     key: String,
///     hits: u32,
/// }
///
/// let mut e = Entry { key: "k".to_string(), hits: 3 };
/// let moved = Relocate::relocate(&mut e);
/// assert_eq!(moved, Entry { key: "k".to_string(), hits: 3 });
/// assert_eq!(e.key, "");
/// ```
///
/// Tuple, unit and generic structs:
///
/// ```
/// use relovec::prelude::*;
///
/// #[derive(Relocate)]
/// struct Pair<A, B>(A, Option<B>);
///
/// #[derive(Relocate)]
/// struct Marker;
///
/// let mut v: Vector<Pair<String, Vec<u8>>, ByRelocate> = Vector::new();
/// for i in 0..4 {
///     v.push_back(Pair(i.to_string(), Some(vec![i])));
/// }
/// assert_eq!(v[3].0, "3");
///
/// let mut m: Vector<Marker, ByRelocate> = Vector::new();
/// m.push_back(Marker);
/// ```
///
/// Enums are rejected:
///
/// ```compile_fail
/// use relovec::prelude::*;
///
/// #[derive(Relocate)]
/// enum Shape {
///     Circle(u32),
///     Square(u32),
/// }
/// ```
///
/// So is a field whose type has no `Relocate` implementation:
///
/// ```compile_fail
/// use relovec::prelude::*;
///
/// struct Opaque;
///
/// #[derive(Relocate)]
/// struct Holder {
///     inner: Opaque,
/// }
/// ```
#[proc_macro_derive(Relocate)]
pub fn derive_relocate(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let item: TokenStream = item.into();
    match derive_relocate_impl(item) {
        Ok(x) => x,
        Err(Error(msg, span)) => quote_spanned!(span =>
            ::core::compile_error!(#msg);
        ),
    }
    .into()
}

struct Error(&'static str, proc_macro2::Span);

fn derive_relocate_impl(item: TokenStream) -> Result<TokenStream, Error> {
    let d: DeriveInput = match syn::parse2(item) {
        Ok(d) => d,
        Err(e) => {
            return Err(Error(
                "derive(Relocate) could not parse this as a struct",
                e.span(),
            ))
        }
    };
    let fields = match &d.data {
        Data::Struct(s) => &s.fields,
        Data::Enum(e) => {
            return Err(Error(
                "derive(Relocate) supports only structs, not enums",
                e.enum_token.span(),
            ))
        }
        Data::Union(u) => {
            return Err(Error(
                "derive(Relocate) supports only structs, not unions",
                u.union_token.span(),
            ))
        }
    };

    let mut generics = d.generics.clone();
    let bounded: Vec<_> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(t) => Some(t.ident.clone()),
            _ => None,
        })
        .collect();
    let where_clause = generics.make_where_clause();
    for ident in bounded {
        where_clause
            .predicates
            .push(parse_quote!(#ident: ::relovec::Relocate));
    }
    let (generics_impl, generics_apply, generics_where) = generics.split_for_impl();

    let relocated_fields = field_members(fields).map(|(member, span)| {
        quote_spanned! { span =>
            #member: ::relovec::Relocate::relocate(&mut src.#member)
        }
    });

    let tyname = &d.ident;
    Ok(quote! {
        impl #generics_impl ::relovec::Relocate for #tyname #generics_apply #generics_where {
            #[inline]
            fn relocate(src: &mut Self) -> Self {
                Self {
                    #(#relocated_fields,)*
                }
            }
        }
    })
}

/// Names every field as it appears in a braced struct expression: `name` or `0`, `1`, ...
fn field_members(fields: &Fields) -> impl Iterator<Item = (Member, proc_macro2::Span)> + '_ {
    fields.iter().enumerate().map(|(i, field)| {
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index {
                index: i as u32,
                span: field.ty.span(),
            }),
        };
        (member, field.ty.span())
    })
}
