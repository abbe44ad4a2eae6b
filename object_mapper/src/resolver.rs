//! Locates the source value that feeds a target field.
//!
//! Redirections attached to the target field are evaluated in declaration
//! order. A field redirection settles the lookup immediately, whether or
//! not the named field exists. A method redirection settles it only when
//! the source registers that accessor and the accessor yields a value;
//! otherwise the next redirection is tried. When nothing settled the
//! lookup, the same-named source field is used.

use crate::descriptor::{FieldDescriptor, RecordSource, Redirect};
use crate::reflect::Reflect;

/// A value found on the source record.
pub enum Resolved<'a> {
    /// A field borrowed from the source.
    Borrowed(&'a dyn Reflect),
    /// The return value of an accessor.
    Owned(Box<dyn Reflect>),
}

impl Resolved<'_> {
    /// Returns the resolved value.
    #[must_use]
    pub fn as_reflect(&self) -> &dyn Reflect {
        match self {
            Self::Borrowed(value) => *value,
            Self::Owned(value) => value.as_ref(),
        }
    }
}

/// Resolves the source value for `field`, a field of the target record.
///
/// Returns `None` when the source has no value for the field; the caller
/// then leaves the target field untouched.
///
/// # Examples
///
/// ```rust
/// use object_mapper::{Mappable, RecordTarget, render};
/// use object_mapper::resolver::resolve_source_field;
///
/// #[derive(Mappable)]
/// #[mapper(read_only)]
/// struct Source {
///     pub nickname: String,
/// }
///
/// #[derive(Default, Mappable)]
/// struct Target {
///     #[mapper(from_field = "nickname")]
///     pub name: String,
/// }
///
/// let source = Source { nickname: "Jo".into() };
/// let target = Target::default();
/// let field = &RecordTarget::descriptor(&target).fields[0];
/// let resolved = resolve_source_field(&source, field).map(|value| render(value.as_reflect()));
/// assert_eq!(resolved.as_deref(), Some("Jo"));
/// ```
#[must_use]
pub fn resolve_source_field<'a>(
    source: &'a dyn RecordSource,
    field: &FieldDescriptor,
) -> Option<Resolved<'a>> {
    for redirect in field.redirects {
        match *redirect {
            Redirect::Field(name) => return source.field(name).map(Resolved::Borrowed),
            Redirect::Method(name) => {
                if !source.descriptor().has_method(name) {
                    continue;
                }
                if let Some(value) = source.call_method(name) {
                    return Some(Resolved::Owned(value));
                }
            }
        }
    }
    source.field(field.name).map(Resolved::Borrowed)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::descriptor::{Access, RecordDescriptor};
    use crate::reflect::render;

    struct Account {
        first: String,
        last: String,
        fail_lookup: bool,
    }

    static ACCOUNT: RecordDescriptor = RecordDescriptor {
        type_name: "Account",
        fields: &[
            FieldDescriptor {
                name: "first",
                type_name: "String",
                access: Access::Public,
                redirects: &[],
            },
            FieldDescriptor {
                name: "last",
                type_name: "String",
                access: Access::Public,
                redirects: &[],
            },
        ],
        methods: &["full_name", "lookup"],
    };

    impl RecordSource for Account {
        fn descriptor(&self) -> &'static RecordDescriptor {
            &ACCOUNT
        }

        fn field(&self, name: &str) -> Option<&dyn Reflect> {
            match name {
                "first" => Some(&self.first),
                "last" => Some(&self.last),
                _ => None,
            }
        }

        fn call_method(&self, name: &str) -> Option<Box<dyn Reflect>> {
            match name {
                "full_name" => Some(Box::new(format!("{} {}", self.first, self.last))),
                "lookup" if !self.fail_lookup => Some(Box::new(String::from("found"))),
                _ => None,
            }
        }
    }

    fn account(fail_lookup: bool) -> Account {
        Account {
            first: "Ada".into(),
            last: "Lovelace".into(),
            fail_lookup,
        }
    }

    fn target_field(name: &'static str, redirects: &'static [Redirect]) -> FieldDescriptor {
        FieldDescriptor {
            name,
            type_name: "String",
            access: Access::Public,
            redirects,
        }
    }

    fn resolve(source: &Account, field: &FieldDescriptor) -> Option<String> {
        resolve_source_field(source, field).map(|value| render(value.as_reflect()))
    }

    #[rstest]
    #[case::same_name(target_field("first", &[]), Some("Ada"))]
    #[case::absent(target_field("middle", &[]), None)]
    #[case::field_redirect(target_field("name", &[Redirect::Field("last")]), Some("Lovelace"))]
    #[case::field_redirect_settles_when_absent(
        target_field("first", &[Redirect::Field("missing"), Redirect::Method("full_name")]),
        None
    )]
    #[case::method_redirect(
        target_field("name", &[Redirect::Method("full_name")]),
        Some("Ada Lovelace")
    )]
    #[case::unknown_method_falls_through(
        target_field("first", &[Redirect::Method("nope")]),
        Some("Ada")
    )]
    #[case::unknown_method_then_field(
        target_field("name", &[Redirect::Method("nope"), Redirect::Field("last")]),
        Some("Lovelace")
    )]
    fn resolves_redirections(#[case] field: FieldDescriptor, #[case] expected: Option<&str>) {
        assert_eq!(resolve(&account(false), &field).as_deref(), expected);
    }

    #[rstest]
    #[case::method_value(false, "found")]
    #[case::method_without_value(true, "Ada")]
    fn method_without_value_continues(#[case] fail_lookup: bool, #[case] expected: &str) {
        let field = target_field("first", &[Redirect::Method("lookup")]);
        assert_eq!(
            resolve(&account(fail_lookup), &field).as_deref(),
            Some(expected)
        );
    }
}
