//! Procedural macros for `object_mapper`.
//!
//! `#[derive(Mappable)]` describes a struct to the mapper: it emits a
//! static record descriptor listing every field with its visibility and
//! `#[mapper(...)]` redirections, together with the reflection trait
//! implementations the mapper dispatches on.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `object_mapper::Mappable` types.
///
/// Supported on structs with named fields, unit structs and single-field
/// tuple structs. Type and const parameters are allowed: the generated
/// impls require every type parameter to be `'static` and every mapped
/// field type to implement `Reflect` (and `ReflectMut` unless
/// `read_only`). Lifetime parameters are rejected.
///
/// Struct attributes:
/// - `#[mapper(methods(a, b))]` registers zero-argument accessors that
///   `from_method` redirections may call.
/// - `#[mapper(read_only)]` implements only the source side.
/// - `#[mapper(opaque)]` on a tuple struct makes it fillable only through
///   a converter.
/// - `#[mapper(crate = "path")]` overrides the runtime crate path.
///
/// Field attributes:
/// - `#[mapper(from_field = "name")]` and `#[mapper(from_method = "name")]`
///   redirect the field's source.
/// - `#[mapper(directive = "fromField:name;fromMethod:name")]` lists
///   redirections in compact form.
/// - `#[mapper(skip)]` excludes the field.
#[proc_macro_derive(Mappable, attributes(mapper))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
