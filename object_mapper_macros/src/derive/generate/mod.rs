//! Code generation for `#[derive(Mappable)]`.
//!
//! Output is wrapped in an anonymous `const` block so the static
//! descriptor and helper items never leak into the caller's namespace.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse_quote;

use super::parse::{MappableInput, Shape};

mod newtype;
mod record;

/// Emits every implementation for the parsed input.
pub(crate) fn emit(input: &MappableInput, krate: &TokenStream) -> TokenStream {
    let body = match &input.shape {
        Shape::Record(fields) => record::emit(input, fields, krate),
        Shape::Newtype(inner) => newtype::emit(input, inner, krate),
    };
    quote! {
        const _: () = {
            #body
        };
    }
}

/// Split generics for one `impl` header.
pub(crate) struct ImplGenerics {
    pub params: TokenStream,
    pub args: TokenStream,
    pub bounds: TokenStream,
}

/// Builds the `impl` generics for a derived trait.
///
/// Generic inputs gain a `'static` bound on every type parameter, since
/// reflection goes through `Any`, plus `ty: bound` for each type in
/// `bounded`. Non-generic inputs get no extra where clause.
pub(crate) fn impl_generics(
    generics: &syn::Generics,
    bounded: &[&syn::Type],
    bound: &TokenStream,
) -> ImplGenerics {
    let mut extended = generics.clone();
    if !generics.params.is_empty() {
        let clause = extended.make_where_clause();
        for param in generics.type_params() {
            let param_ident = &param.ident;
            clause.predicates.push(parse_quote!(#param_ident: 'static));
        }
        for ty in bounded {
            clause.predicates.push(parse_quote!(#ty: #bound));
        }
    }
    let (params, args, bounds) = extended.split_for_impl();
    ImplGenerics {
        params: quote!(#params),
        args: quote!(#args),
        bounds: quote!(#bounds),
    }
}

/// Renders a type for diagnostics, dropping the spaces token printing
/// inserts around punctuation.
pub(crate) fn type_label(ty: &syn::Type) -> String {
    let raw = quote!(#ty).to_string();
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut prev = None;
    while let Some(c) = chars.next() {
        if c == ' ' {
            let glued_left = prev.is_some_and(|p| matches!(p, '<' | ':' | '&' | '(' | '['));
            let glued_right = chars
                .peek()
                .is_some_and(|n| matches!(n, '<' | '>' | ':' | ',' | ')' | ']' | ';'));
            if glued_left || glued_right {
                continue;
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}
