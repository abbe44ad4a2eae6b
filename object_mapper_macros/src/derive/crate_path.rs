//! Prefix for runtime items referenced by generated code.
//!
//! Derived impls name `object_mapper` items by path. A crate that depends
//! on the runtime under another name, or re-exports it, points the derive
//! at it with `#[mapper(crate = "...")]`.

use proc_macro2::TokenStream;
use quote::quote;

/// Tokens placed before every runtime path, such as `#krate::Reflect`.
///
/// Without an override this is `object_mapper`, which the runtime crate
/// also declares for itself through `extern crate self as object_mapper`.
pub(crate) fn runtime_path(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { object_mapper }, |path| quote! { #path })
}
