//! Primary error enum for mapping flows.

use std::fmt;

use thiserror::Error;

use crate::reflect::{ShapeKind, TypeKey};

/// Names the argument rejected by [`MapError::NilArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    /// The value being read.
    Source,
    /// The location being filled.
    Target,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Target => "target",
        })
    }
}

/// Errors that can occur while mapping a source into a target.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapError {
    /// A required argument was absent.
    #[error("invalid parameter: {argument} cannot be nil")]
    NilArgument {
        /// The missing argument.
        argument: Argument,
    },

    /// The target cannot be written to.
    #[error("invalid parameter: target must be a mutable reference")]
    TargetNotAddressable,

    /// The source's shape cannot feed the target's shape.
    #[error("cannot map to a {expected} from type: {actual}")]
    TypeMismatch {
        /// Shape required by the target.
        expected: ShapeKind,
        /// Type of the offending source value.
        actual: TypeKey,
    },

    /// Populating one record field failed.
    #[error("invalid field: {field}: {source}")]
    FieldProjection {
        /// Name of the target field.
        field: &'static str,
        /// Failure raised while mapping the field.
        #[source]
        source: Box<MapError>,
    },

    /// Populating one list element failed.
    #[error("invalid list element [{index}]: {source}")]
    Element {
        /// Position of the element.
        index: usize,
        /// Failure raised while mapping the element.
        #[source]
        source: Box<MapError>,
    },

    /// The target type can only be filled by a converter and none is
    /// registered for it.
    #[error("no converter registered for target type {target}")]
    MissingConverter {
        /// Type of the slot being filled.
        target: TypeKey,
    },

    /// The source cannot be assigned to the target without conversion.
    #[error("cannot assign a value of type {source_type} to {target}")]
    IncompatibleAssignment {
        /// Type of the slot being filled.
        target: TypeKey,
        /// Type of the value offered.
        source_type: TypeKey,
    },

    /// A registered converter rejected its input.
    #[error("converter for {target} failed: {source}")]
    Conversion {
        /// Type of the slot being filled.
        target: TypeKey,
        /// Reason reported by the converter.
        #[source]
        source: ConvertError,
    },
}

/// Failure reported by a converter function.
///
/// # Examples
///
/// ```rust
/// use object_mapper::{ConvertError, TypeKey};
///
/// let err = ConvertError::unexpected_source("a string", TypeKey::of::<u8>());
/// assert_eq!(err.to_string(), "expected a string, found u8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConvertError {
    message: String,
}

impl ConvertError {
    /// Creates an error carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates an error for a source value of an unsupported type.
    #[must_use]
    pub fn unexpected_source(expected: &str, found: TypeKey) -> Self {
        Self::new(format!("expected {expected}, found {found}"))
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
