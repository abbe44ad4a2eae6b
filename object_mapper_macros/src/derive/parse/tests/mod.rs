//! Tests for `#[mapper(...)]` parsing behaviour.

use super::*;
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

mod directives;

fn record_fields(input: &DeriveInput) -> Result<(StructAttrs, Vec<FieldSpec>)> {
    let parsed = parse_input(input).map_err(|err| anyhow!(err))?;
    match parsed.shape {
        Shape::Record(fields) => Ok((parsed.attrs, fields)),
        Shape::Newtype(_) => Err(anyhow!("expected a record shape")),
    }
}

#[rstest]
fn parses_struct_and_field_attributes() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[mapper(methods(full_name, age_in_days), crate = "deps::object_mapper")]
        struct Person {
            #[mapper(from_field = "first_name")]
            pub name: String,
            #[mapper(from_method = "full_name", from_field = "alias")]
            pub display: String,
            #[mapper(skip)]
            pub cache: String,
            secret: String,
        }
    };

    let (attrs, fields) = record_fields(&input)?;
    ensure!(
        attrs.methods.len() == 2,
        "expected two methods, got {}",
        attrs.methods.len()
    );
    ensure!(attrs.crate_path.is_some(), "expected crate override");
    ensure!(fields.len() == 4, "expected four fields");

    let name = fields.first().ok_or_else(|| anyhow!("missing name"))?;
    ensure!(
        name.attrs.redirects == vec![RedirectAttr::Field("first_name".into())],
        "unexpected name redirects"
    );

    let display = fields.get(1).ok_or_else(|| anyhow!("missing display"))?;
    ensure!(
        matches!(
            display.attrs.redirects.as_slice(),
            [RedirectAttr::Method(method), RedirectAttr::Field(field)]
                if method == "full_name" && field == "alias"
        ),
        "redirects must keep declaration order"
    );

    let cache = fields.get(2).ok_or_else(|| anyhow!("missing cache"))?;
    ensure!(cache.attrs.skip && !cache.is_accessible(), "cache must be skipped");

    let secret = fields.get(3).ok_or_else(|| anyhow!("missing secret"))?;
    ensure!(!secret.public, "secret must be private");
    Ok(())
}

#[rstest]
fn ignores_unknown_keys() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[mapper(future_option = "x", other(nested))]
        struct Demo {
            #[mapper(rename = "ignored", from_field = "value")]
            pub field: u8,
        }
    };
    let (_, fields) = record_fields(&input)?;
    let field = fields.first().ok_or_else(|| anyhow!("missing field"))?;
    ensure!(
        field.attrs.redirects == vec![RedirectAttr::Field("value".into())],
        "unknown keys must not disturb known ones"
    );
    Ok(())
}

#[rstest]
fn raw_identifiers_are_unrawed() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            pub r#type: String,
        }
    };
    let (_, fields) = record_fields(&input)?;
    let field = fields.first().ok_or_else(|| anyhow!("missing field"))?;
    ensure!(field.name() == "type", "got {}", field.name());
    Ok(())
}

#[rstest]
fn unit_structs_are_empty_records() -> Result<()> {
    let input: DeriveInput = parse_quote! { struct Marker; };
    let (_, fields) = record_fields(&input)?;
    ensure!(fields.is_empty(), "unit structs have no fields");
    Ok(())
}

#[rstest]
fn newtypes_are_recognised() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[mapper(opaque)]
        struct Level(String);
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
    ensure!(matches!(parsed.shape, Shape::Newtype(_)), "expected newtype");
    ensure!(parsed.attrs.opaque, "expected opaque flag");
    Ok(())
}

#[rstest]
fn generic_structs_keep_their_parameters() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Page<T, const N: usize> where T: Clone {
            pub items: Vec<T>,
            pub window: [u8; N],
        }
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
    ensure!(parsed.generics.params.len() == 2, "expected both parameters");
    ensure!(parsed.generics.where_clause.is_some(), "expected the where clause");
    let (_, fields) = record_fields(&input)?;
    ensure!(fields.len() == 2, "expected two fields");
    Ok(())
}

#[rstest]
#[case::lifetime(
    parse_quote! { struct Borrowed<'a> { pub value: &'a str } },
    "Mappable cannot be derived for types with lifetime parameters"
)]
#[case::lifetime_among_types(
    parse_quote! { struct Mixed<'a, T> { pub value: &'a T } },
    "Mappable cannot be derived for types with lifetime parameters"
)]
#[case::enumeration(
    parse_quote! { enum Choice { A, B } },
    "Mappable can only be derived for structs"
)]
#[case::tuple(
    parse_quote! { struct Pair(u8, u8); },
    "Mappable requires named fields or a single-field tuple struct"
)]
#[case::opaque_record(
    parse_quote! { #[mapper(opaque)] struct Demo { pub value: u8 } },
    "`opaque` applies only to single-field tuple structs"
)]
#[case::methods_on_newtype(
    parse_quote! { #[mapper(methods(get))] struct Id(u8); },
    "`methods` applies only to structs with named fields"
)]
#[case::skip_with_redirect(
    parse_quote! { struct Demo { #[mapper(skip, from_field = "x")] pub value: u8 } },
    "`skip` cannot be combined with redirections"
)]
#[case::non_string(
    parse_quote! { struct Demo { #[mapper(from_field = 3)] pub value: u8 } },
    "from_field must be a string"
)]
#[case::empty_field(
    parse_quote! { struct Demo { #[mapper(from_field = "  ")] pub value: u8 } },
    "fromField requires a field name"
)]
#[case::bad_method(
    parse_quote! { struct Demo { #[mapper(from_method = "not a name")] pub value: u8 } },
    "`not a name` is not a valid method name"
)]
#[case::duplicate_method(
    parse_quote! { #[mapper(methods(get, get))] struct Demo { pub value: u8 } },
    "method `get` is listed twice"
)]
fn rejects_invalid_input(#[case] input: DeriveInput, #[case] expected: &str) -> Result<()> {
    let Err(err) = parse_input(&input) else {
        return Err(anyhow!("expected an error mentioning {expected}"));
    };
    ensure!(err.to_string() == expected, "got {err}");
    Ok(())
}
