//! Structural object-to-object value mapping.
//!
//! `object_mapper` copies values from a source into a mutable target by
//! matching record fields by name. Types describe themselves through the
//! [`Reflect`] and [`ReflectMut`] traits, usually generated by
//! `#[derive(Mappable)]`, so the mapper walks nested records, optionals,
//! lists, strings and plain scalars without runtime reflection.
//!
//! ```rust
//! use object_mapper::{Mappable, map};
//!
//! #[derive(Mappable)]
//! struct Person {
//!     pub name: String,
//!     pub age: u32,
//! }
//!
//! #[derive(Debug, Default, PartialEq, Mappable)]
//! struct PersonView {
//!     pub name: String,
//!     pub age: String,
//! }
//!
//! let source = Person { name: "John".into(), age: 23 };
//! let mut target = PersonView::default();
//! map(&source, &mut target)?;
//! assert_eq!(target, PersonView { name: "John".into(), age: "23".into() });
//! # Ok::<(), object_mapper::MapError>(())
//! ```
//!
//! Target fields may redirect their source with
//! `#[mapper(from_field = "...")]`, `#[mapper(from_method = "...")]` or the
//! compact `#[mapper(directive = "fromField:name;fromMethod:name")]` form.
//! Types that cannot be mapped structurally are filled through
//! [`Converters`] keyed by the target type.

extern crate self as object_mapper;

pub use object_mapper_macros::Mappable;

pub mod convert;
pub mod descriptor;
mod error;
mod mapper;
pub mod options;
pub mod reflect;
pub mod resolver;

pub use convert::{ConverterFn, ConverterView, Converters, default_converters};
pub use descriptor::{
    Access, FieldDescriptor, MethodOutput, RecordDescriptor, RecordSource, RecordTarget, Redirect,
};
pub use error::{Argument, ConvertError, MapError, MapResult};
pub use mapper::{Destination, Mapper, map, map_dynamic, map_with_converters, map_with_options};
pub use options::{ElementFailure, ElementHook, ListErrorPolicy, MapOptions, MapperSettings};
pub use reflect::{
    ListSource, ListTarget, MapSource, OpaqueValue, OptionalTarget, Reflect, ReflectMut, Reflected,
    ReflectedMut, Scalar, ShapeKind, Slot, TypeKey, render,
};
