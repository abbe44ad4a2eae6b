//! Parsing utilities for the `Mappable` derive macro.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Ident, Token, parenthesized};

mod directive;
mod input;
mod literals;
#[cfg(test)]
mod tests;

pub(crate) use input::{FieldSpec, MappableInput, Shape, parse_input};
use literals::lit_str;

/// Struct-level attributes recognised by `#[derive(Mappable)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Accessors callable through method redirections.
    pub methods: Vec<Ident>,
    /// Tuple newtypes marked `opaque` are converter-only targets.
    pub opaque: bool,
    /// Emits only the source-side implementations.
    pub read_only: bool,
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(Mappable)]`.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    /// Redirections in declaration order.
    pub redirects: Vec<RedirectAttr>,
    /// Excludes the field from mapping.
    pub skip: bool,
}

/// A parsed redirection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RedirectAttr {
    /// Read the named source field.
    Field(String),
    /// Call the named source accessor.
    Method(Ident),
}

/// Iterate all `#[mapper(...)]` attributes once and apply a callback.
fn parse_mapper<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("mapper")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Extracts `#[mapper(...)]` metadata applied to a struct.
///
/// Unknown keys are ignored so callers keep compiling when new attributes
/// appear.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_mapper(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("methods") => meta.parse_nested_meta(|nested| {
                let ident = nested.path.require_ident()?;
                if out.methods.contains(ident) {
                    return Err(nested.error(format!("method `{ident}` is listed twice")));
                }
                out.methods.push(ident.clone());
                Ok(())
            }),
            Some("opaque") => {
                out.opaque = true;
                Ok(())
            }
            Some("read_only") => {
                out.read_only = true;
                Ok(())
            }
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            _ => discard_unknown(meta),
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[mapper(...)]` attributes.
///
/// Recognised keys are `from_field`, `from_method`, `directive` and
/// `skip`. Redirections from every form are kept in the order they are
/// written.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_mapper(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("from_field") => {
                let s = lit_str(meta, "from_field")?;
                out.redirects
                    .push(RedirectAttr::Field(directive::field_name(&s.value(), s.span())?));
                Ok(())
            }
            Some("from_method") => {
                let s = lit_str(meta, "from_method")?;
                out.redirects
                    .push(RedirectAttr::Method(directive::method_name(&s.value(), s.span())?));
                Ok(())
            }
            Some("directive") => {
                let s = lit_str(meta, "directive")?;
                out.redirects
                    .extend(directive::parse_directive(&s.value(), s.span())?);
                Ok(())
            }
            Some("skip") => {
                out.skip = true;
                Ok(())
            }
            _ => discard_unknown(meta),
        }
    })?;
    Ok(out)
}
