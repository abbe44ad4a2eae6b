//! Unit tests for error messages and path reconstruction.

use rstest::rstest;

use super::*;
use crate::reflect::{ShapeKind, TypeKey};

fn nested() -> MapError {
    MapError::field(
        "child",
        MapError::field(
            "items",
            MapError::element(
                2,
                MapError::field(
                    "id",
                    MapError::MissingConverter {
                        target: TypeKey::from_name("Id"),
                    },
                ),
            ),
        ),
    )
}

#[rstest]
#[case::nil_source(
    MapError::NilArgument { argument: Argument::Source },
    "invalid parameter: source cannot be nil"
)]
#[case::nil_target(
    MapError::NilArgument { argument: Argument::Target },
    "invalid parameter: target cannot be nil"
)]
#[case::not_addressable(
    MapError::TargetNotAddressable,
    "invalid parameter: target must be a mutable reference"
)]
#[case::mismatch(
    MapError::TypeMismatch { expected: ShapeKind::List, actual: TypeKey::from_name("Entry") },
    "cannot map to a list from type: Entry"
)]
#[case::conversion(
    MapError::Conversion { target: TypeKey::from_name("Stamp"), source: ConvertError::new("bad") },
    "converter for Stamp failed: bad"
)]
fn messages(#[case] err: MapError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[rstest]
fn field_errors_name_the_field() {
    let err = MapError::field("age", MapError::TargetNotAddressable);
    assert_eq!(
        err.to_string(),
        "invalid field: age: invalid parameter: target must be a mutable reference"
    );
}

#[rstest]
fn path_joins_fields_and_indices() {
    assert_eq!(nested().path(), "child.items[2].id");
}

#[rstest]
fn top_level_errors_have_empty_path() {
    assert_eq!(MapError::TargetNotAddressable.path(), "");
}

#[rstest]
fn root_cause_skips_context() {
    let err = nested();
    assert!(matches!(
        err.root_cause(),
        MapError::MissingConverter { target } if target.as_str() == "Id"
    ));
}

#[rstest]
fn sources_chain_to_the_root() {
    use std::error::Error as _;

    let err = nested();
    let mut depth = 0;
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(&err);
    while let Some(next) = current {
        depth += 1;
        current = next.source();
    }
    assert_eq!(depth, 5);
}
