//! Expansion pipeline for `#[derive(Mappable)]`.

mod crate_path;
mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parses `input` and emits the generated implementations.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let krate = crate_path::runtime_path(parsed.attrs.crate_path.as_ref());
    Ok(generate::emit(&parsed, &krate))
}
