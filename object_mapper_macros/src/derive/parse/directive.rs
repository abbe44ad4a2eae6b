//! The compact `key:value;key:value` redirection grammar.
//!
//! Settings are separated by `;` and split at the first `:`. Surrounding
//! whitespace is ignored, as are empty settings and unrecognised settings,
//! with or without a value. The recognised keys are `fromField` and
//! `fromMethod`; both require a non-empty value.

use proc_macro2::Span;
use syn::Ident;

use super::RedirectAttr;

/// Parses a directive string into redirections, preserving their order.
pub(crate) fn parse_directive(text: &str, span: Span) -> syn::Result<Vec<RedirectAttr>> {
    let mut redirects = Vec::new();
    for setting in text.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (key, value) = setting.split_once(':').unwrap_or((setting, ""));
        match key.trim() {
            "fromField" => redirects.push(RedirectAttr::Field(field_name(value, span)?)),
            "fromMethod" => redirects.push(RedirectAttr::Method(method_name(value, span)?)),
            _ => {}
        }
    }
    Ok(redirects)
}

/// Validates a source field name.
pub(crate) fn field_name(value: &str, span: Span) -> syn::Result<String> {
    let name = value.trim();
    if name.is_empty() {
        return Err(syn::Error::new(span, "fromField requires a field name"));
    }
    Ok(name.to_owned())
}

/// Validates a source accessor name.
pub(crate) fn method_name(value: &str, span: Span) -> syn::Result<Ident> {
    let name = value.trim();
    if name.is_empty() {
        return Err(syn::Error::new(span, "fromMethod requires a method name"));
    }
    syn::parse_str::<Ident>(name)
        .map(|mut ident| {
            ident.set_span(span);
            ident
        })
        .map_err(|_| syn::Error::new(span, format!("`{name}` is not a valid method name")))
}
