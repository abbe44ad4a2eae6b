//! Tests for the compact directive grammar.

use super::super::RedirectAttr;
use super::super::directive::parse_directive;
use anyhow::{Result, anyhow, ensure};
use proc_macro2::Span;
use rstest::rstest;

fn field(name: &str) -> RedirectAttr {
    RedirectAttr::Field(name.to_owned())
}

fn method(name: &str) -> RedirectAttr {
    RedirectAttr::Method(syn::Ident::new(name, Span::call_site()))
}

#[rstest]
#[case::field_only("fromField:Name", vec![field("Name")])]
#[case::method_only("fromMethod:full_name", vec![method("full_name")])]
#[case::ordered(
    "fromMethod:full_name;fromField:alias",
    vec![method("full_name"), field("alias")]
)]
#[case::whitespace(" fromField : alias ; ", vec![field("alias")])]
#[case::unknown_keys_ignored("json:name;fromField:alias;other:x", vec![field("alias")])]
#[case::empty("", vec![])]
#[case::value_with_colon("fromField:a:b", vec![field("a:b")])]
#[case::bare_unknown_setting_ignored("fromField:alias;omitempty", vec![field("alias")])]
#[case::only_bare_settings("omitempty; readonly", vec![])]
fn parses_directives(#[case] text: &str, #[case] expected: Vec<RedirectAttr>) -> Result<()> {
    let parsed = parse_directive(text, Span::call_site()).map_err(|err| anyhow!(err))?;
    ensure!(parsed == expected, "parsed {parsed:?}, expected {expected:?}");
    Ok(())
}

#[rstest]
#[case::missing_field_colon("fromField", "fromField requires a field name")]
#[case::missing_method_colon("fromMethod;fromField:alias", "fromMethod requires a method name")]
#[case::empty_field("fromField:", "fromField requires a field name")]
#[case::empty_method("fromMethod: ", "fromMethod requires a method name")]
#[case::invalid_method("fromMethod:1abc", "`1abc` is not a valid method name")]
fn rejects_malformed_directives(#[case] text: &str, #[case] expected: &str) -> Result<()> {
    let Err(err) = parse_directive(text, Span::call_site()) else {
        return Err(anyhow!("expected `{text}` to be rejected"));
    };
    ensure!(err.to_string() == expected, "got {err}");
    Ok(())
}
