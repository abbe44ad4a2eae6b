//! Input parsing for the `Mappable` derive macro.
//!
//! This module gathers the struct identifier, its shape and the attribute
//! metadata in one pass so macro expansion can fail fast with useful
//! errors.

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Visibility};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// Everything the generators need about the deriving type.
pub(crate) struct MappableInput {
    pub ident: Ident,
    pub generics: Generics,
    pub attrs: StructAttrs,
    pub shape: Shape,
}

/// How the deriving type is mapped.
pub(crate) enum Shape {
    /// Named fields, or none for unit structs.
    Record(Vec<FieldSpec>),
    /// A single-field tuple struct, with the type of its field.
    Newtype(Type),
}

/// A named field of a record.
pub(crate) struct FieldSpec {
    pub ident: Ident,
    pub ty: Type,
    pub public: bool,
    pub attrs: FieldAttrs,
}

impl FieldSpec {
    /// Field name without any raw-identifier prefix.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Whether the mapper may read and write the field.
    pub(crate) const fn is_accessible(&self) -> bool {
        self.public && !self.attrs.skip
    }
}

/// Gathers information from the user-provided struct.
///
/// Types with lifetime parameters, enums, unions and tuple structs with
/// more than one field are rejected.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<MappableInput> {
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Mappable cannot be derived for types with lifetime parameters",
        ));
    }
    let attrs = parse_struct_attrs(&input.attrs)?;
    let shape = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => {
                Shape::Record(named.named.iter().map(field_spec).collect::<syn::Result<_>>()?)
            }
            Fields::Unit => Shape::Record(Vec::new()),
            Fields::Unnamed(unnamed) => match unnamed.unnamed.iter().collect::<Vec<_>>().as_slice() {
                [inner] => Shape::Newtype(inner.ty.clone()),
                _ => {
                    return Err(syn::Error::new_spanned(
                        data.struct_token,
                        "Mappable requires named fields or a single-field tuple struct",
                    ));
                }
            },
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Mappable can only be derived for structs",
            ));
        }
    };
    validate(&input.ident, &attrs, &shape)?;
    Ok(MappableInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        shape,
    })
}

fn field_spec(field: &syn::Field) -> syn::Result<FieldSpec> {
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };
    let attrs = parse_field_attrs(&field.attrs)?;
    if attrs.skip && !attrs.redirects.is_empty() {
        return Err(syn::Error::new_spanned(
            field,
            "`skip` cannot be combined with redirections",
        ));
    }
    Ok(FieldSpec {
        ident,
        ty: field.ty.clone(),
        public: matches!(field.vis, Visibility::Public(_)),
        attrs,
    })
}

fn validate(ident: &Ident, attrs: &StructAttrs, shape: &Shape) -> syn::Result<()> {
    match shape {
        Shape::Record(_) if attrs.opaque => Err(syn::Error::new_spanned(
            ident,
            "`opaque` applies only to single-field tuple structs",
        )),
        Shape::Newtype(_) if !attrs.methods.is_empty() => Err(syn::Error::new_spanned(
            ident,
            "`methods` applies only to structs with named fields",
        )),
        _ => Ok(()),
    }
}
