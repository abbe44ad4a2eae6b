//! Runtime type descriptors standing in for reflection.
//!
//! Source values expose a read-only [`Reflected`] view of their shape and
//! target slots expose a [`ReflectedMut`] view the mapper dispatches on.
//! Implementations for primitives, `String`, `Option`, `Box`, `Vec` and the
//! standard maps live here; records are described by
//! `#[derive(Mappable)]`.

use std::any::{Any, type_name};
use std::fmt;

#[cfg(feature = "chrono")]
mod chrono_impls;
mod render;
mod scalar;
mod std_impls;

pub use render::render;
pub use scalar::Scalar;

use crate::descriptor::{RecordSource, RecordTarget};

/// Fully-qualified identifier of a Rust type.
///
/// Keys are derived from [`std::any::type_name`], which is stable within a
/// single build. Converter tables use them to select a conversion by the
/// type of the slot being filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(&'static str);

impl TypeKey {
    /// Returns the key of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_mapper::TypeKey;
    ///
    /// assert_eq!(TypeKey::of::<String>().as_str(), "alloc::string::String");
    /// ```
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self(type_name::<T>())
    }

    /// Wraps an already known type name.
    #[must_use]
    pub const fn from_name(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the underlying type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Coarse shape categories, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// `Option<T>`-like values.
    Optional,
    /// Structs with named fields.
    Record,
    /// Sequences such as `Vec<T>`.
    List,
    /// Owned strings.
    String,
    /// Primitive scalars.
    Scalar,
    /// Key/value maps.
    Map,
    /// Values only reachable through a converter.
    Opaque,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Optional => "optional",
            Self::Record => "record",
            Self::List => "list",
            Self::String => "string",
            Self::Scalar => "scalar",
            Self::Map => "map",
            Self::Opaque => "opaque value",
        };
        f.write_str(label)
    }
}

/// Read-only access to a value's runtime shape.
///
/// This is the source side of a mapping. Implementations must be `'static`
/// so values can be downcast when a passthrough assignment is attempted.
pub trait Reflect: Any {
    /// Identifier of the concrete type.
    fn type_key(&self) -> TypeKey;

    /// Returns `self` as [`Any`] for exact-type assignments.
    ///
    /// Transparent wrappers such as `Box<T>` return their inner value.
    fn as_any(&self) -> &dyn Any;

    /// Describes the value's shape.
    fn reflect(&self) -> Reflected<'_>;
}

/// Shape of a source value.
#[derive(Clone, Copy)]
pub enum Reflected<'a> {
    /// A primitive value.
    Scalar(Scalar),
    /// String data.
    Str(&'a str),
    /// An optional value; `None` is the empty optional.
    Optional(Option<&'a dyn Reflect>),
    /// A record with named fields.
    Record(&'a dyn RecordSource),
    /// A positional sequence.
    List(&'a dyn ListSource),
    /// A key/value map.
    Map(&'a dyn MapSource),
    /// A value whose structure is hidden.
    Opaque(&'a dyn OpaqueValue),
}

impl Reflected<'_> {
    /// Returns the shape category of the view.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Scalar(_) => ShapeKind::Scalar,
            Self::Str(_) => ShapeKind::String,
            Self::Optional(_) => ShapeKind::Optional,
            Self::Record(_) => ShapeKind::Record,
            Self::List(_) => ShapeKind::List,
            Self::Map(_) => ShapeKind::Map,
            Self::Opaque(_) => ShapeKind::Opaque,
        }
    }

    /// Reports whether the value equals its type's zero value.
    ///
    /// Empty optionals, zero scalars, empty strings, empty lists and maps,
    /// and records whose accessible fields are all zero count as zero.
    /// Opaque values decide for themselves.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Scalar(scalar) => scalar.is_zero(),
            Self::Str(text) => text.is_empty(),
            Self::Optional(inner) => inner.is_none(),
            Self::Record(record) => record
                .descriptor()
                .accessible_fields()
                .all(|field| {
                    record
                        .field(field.name)
                        .is_none_or(|value| value.reflect().is_zero())
                }),
            Self::List(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Opaque(value) => value.is_zero(),
        }
    }
}

/// Positional access to a source sequence.
pub trait ListSource {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`, if any.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns `true` when the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Entry access to a source map.
pub trait MapSource {
    /// Number of entries.
    fn len(&self) -> usize;

    /// Key/value pairs in the map's iteration order.
    fn entries(&self) -> Vec<(&dyn Reflect, &dyn Reflect)>;

    /// Returns `true` when the map holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Values whose internals are not mapped structurally.
///
/// Opaque values render through [`fmt::Display`] when copied into a string
/// and can only be written through a registered converter.
pub trait OpaqueValue: fmt::Display {
    /// Reports whether the value is its type's zero value.
    fn is_zero(&self) -> bool {
        false
    }
}

/// Mutable access to a target slot.
pub trait ReflectMut: Reflect {
    /// Describes the slot so the mapper can pick a strategy.
    fn reflect_mut(&mut self) -> ReflectedMut<'_>;

    /// Stores a converter result into the slot.
    ///
    /// # Errors
    ///
    /// Hands the value back when its type does not fit the slot.
    fn assign_boxed(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>>;
}

/// Shape of a target slot.
pub enum ReflectedMut<'a> {
    /// An optional slot, filled with a freshly allocated value.
    Optional(&'a mut dyn OptionalTarget),
    /// A record whose fields are filled one by one.
    Record(&'a mut dyn RecordTarget),
    /// A sequence rebuilt to the source's length.
    List(&'a mut dyn ListTarget),
    /// A string receiving the source's rendering.
    String(&'a mut String),
    /// A value assigned only from the identical type.
    Passthrough(&'a mut dyn Slot),
    /// A value that requires a converter.
    Opaque,
}

/// Optional target slots.
pub trait OptionalTarget {
    /// Empties the slot.
    fn clear(&mut self);

    /// Replaces the content with a fresh default value and returns it.
    fn fresh(&mut self) -> &mut dyn ReflectMut;
}

/// Sequence target slots.
pub trait ListTarget {
    /// Replaces the content with `len` default elements.
    fn reset(&mut self, len: usize);

    /// Element slot at `index`, if any.
    fn element_mut(&mut self, index: usize) -> Option<&mut dyn ReflectMut>;
}

/// Plain values assigned by exact type.
pub trait Slot {
    /// Copies `source` into the slot when it has the slot's type.
    ///
    /// Returns `false`, leaving the slot untouched, on a type mismatch.
    fn assign_from(&mut self, source: &dyn Any) -> bool;

    /// Restores the type's default value.
    fn reset(&mut self);
}

impl<T: Any + Clone + Default> Slot for T {
    fn assign_from(&mut self, source: &dyn Any) -> bool {
        let Some(value) = source.downcast_ref::<T>() else {
            return false;
        };
        self.clone_from(value);
        true
    }

    fn reset(&mut self) {
        *self = T::default();
    }
}

/// Stores `value` into `slot` when it holds a `T`.
///
/// Derived and built-in [`ReflectMut::assign_boxed`] implementations
/// delegate here.
///
/// # Errors
///
/// Returns the value unchanged when it is not a `T`.
pub fn assign_downcast<T: Any>(slot: &mut T, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
    *slot = *value.downcast::<T>()?;
    Ok(())
}
