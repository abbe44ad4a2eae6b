//! Record descriptors generated by `#[derive(Mappable)]`.
//!
//! A [`RecordDescriptor`] lists every field of a record, including private
//! ones, together with the redirection directives attached to it. The
//! derive emits one `static` descriptor per type, so attributes are parsed
//! once at build time rather than on every mapping call.

use crate::reflect::{Reflect, ReflectMut};

/// Whether the mapper may read or write a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// A `pub` field.
    Public,
    /// A field not visible outside its module; never read or written.
    Private,
    /// A field excluded with `#[mapper(skip)]`.
    Skipped,
}

/// Alternative source for a target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Redirect {
    /// Read the named source field instead of the same-named one.
    Field(&'static str),
    /// Call the named zero-argument accessor on the source.
    Method(&'static str),
}

/// Metadata for one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as declared.
    pub name: &'static str,
    /// Declared type, as written in the source code.
    pub type_name: &'static str,
    /// Visibility to the mapper.
    pub access: Access,
    /// Redirections, evaluated in declaration order.
    pub redirects: &'static [Redirect],
}

impl FieldDescriptor {
    /// Returns `true` when the mapper may touch the field.
    #[must_use]
    pub const fn is_accessible(&self) -> bool {
        matches!(self.access, Access::Public)
    }
}

/// Metadata for a record type.
#[derive(Debug)]
pub struct RecordDescriptor {
    /// Fully-qualified type name.
    pub type_name: &'static str,
    /// Fields in declaration order.
    pub fields: &'static [FieldDescriptor],
    /// Accessors callable through `fromMethod` redirections.
    pub methods: &'static [&'static str],
}

impl RecordDescriptor {
    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the declaration index of a field.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Reports whether an accessor is registered under `name`.
    #[must_use]
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|method| *method == name)
    }

    /// Iterates over the fields the mapper may touch.
    pub fn accessible_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.is_accessible())
    }
}

/// Read access to a record's fields and accessors.
pub trait RecordSource {
    /// The record's descriptor.
    fn descriptor(&self) -> &'static RecordDescriptor;

    /// Returns an accessible field by name.
    ///
    /// Absent and non-public fields both yield `None`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Calls a registered zero-argument accessor.
    ///
    /// Yields `None` when no accessor is registered under `name` or the
    /// accessor produced no value.
    fn call_method(&self, name: &str) -> Option<Box<dyn Reflect>>;
}

/// Write access to a record's fields.
pub trait RecordTarget {
    /// The record's descriptor.
    fn descriptor(&self) -> &'static RecordDescriptor;

    /// Returns the slot of the field at `index` in the descriptor.
    ///
    /// Non-public and skipped fields yield `None`.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn ReflectMut>;
}

/// Normalises an accessor's return value to its first value.
///
/// Plain values are used as they are, `Result` contributes its `Ok` value
/// and pairs their first element. An `Err` produces no value, so the field
/// resolver moves on to its next candidate.
pub trait MethodOutput {
    /// Converts the return value into a reflected value.
    fn into_output(self) -> Option<Box<dyn Reflect>>;
}

impl<T: Reflect> MethodOutput for T {
    fn into_output(self) -> Option<Box<dyn Reflect>> {
        Some(Box::new(self))
    }
}

impl<T: Reflect, E> MethodOutput for Result<T, E> {
    fn into_output(self) -> Option<Box<dyn Reflect>> {
        self.ok().map(|value| Box::new(value) as Box<dyn Reflect>)
    }
}

impl<T: Reflect, U> MethodOutput for (T, U) {
    fn into_output(self) -> Option<Box<dyn Reflect>> {
        Some(Box::new(self.0))
    }
}
