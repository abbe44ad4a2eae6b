//! Converter tables keyed by target type.
//!
//! A converter produces the value for a target slot from an arbitrary
//! source value. Before structural mapping, the mapper looks up the slot's
//! [`TypeKey`] first in the caller's table and then in the process-wide
//! defaults returned by [`default_converters`]. The defaults are built
//! once and never mutated, so concurrent mappings with different caller
//! tables do not observe each other's entries.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::error::ConvertError;
use crate::reflect::{Reflect, TypeKey};

mod builtin;

/// Shared converter callback.
///
/// The returned box must hold a value of the registered target type.
pub type ConverterFn =
    Arc<dyn Fn(&dyn Reflect) -> Result<Box<dyn Any>, ConvertError> + Send + Sync>;

/// A table of converters keyed by target type.
///
/// # Examples
///
/// ```rust
/// use object_mapper::{ConvertError, Converters, Reflected, TypeKey};
///
/// let mut converters = Converters::new();
/// converters.register::<u8, _>(|source| match source.reflect() {
///     Reflected::Str(text) => text
///         .parse()
///         .map_err(|_| ConvertError::new(format!("not a byte: {text}"))),
///     _ => Err(ConvertError::unexpected_source("a string", source.type_key())),
/// });
/// assert!(converters.contains(TypeKey::of::<u8>()));
/// ```
#[derive(Clone, Default)]
pub struct Converters {
    entries: HashMap<TypeKey, ConverterFn>,
}

impl Converters {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a type-erased converter, replacing any previous entry for
    /// `target`.
    pub fn insert(&mut self, target: TypeKey, converter: ConverterFn) -> Option<ConverterFn> {
        self.entries.insert(target, converter)
    }

    /// Registers a converter producing values of type `T`.
    pub fn register<T, F>(&mut self, convert: F) -> &mut Self
    where
        T: Any,
        F: Fn(&dyn Reflect) -> Result<T, ConvertError> + Send + Sync + 'static,
    {
        let erased: ConverterFn = Arc::new(move |source: &dyn Reflect| {
            convert(source).map(|value| Box::new(value) as Box<dyn Any>)
        });
        self.entries.insert(TypeKey::of::<T>(), erased);
        self
    }

    /// Builder form of [`Converters::register`].
    #[must_use]
    pub fn with<T, F>(mut self, convert: F) -> Self
    where
        T: Any,
        F: Fn(&dyn Reflect) -> Result<T, ConvertError> + Send + Sync + 'static,
    {
        self.register::<T, F>(convert);
        self
    }

    /// Returns the converter registered for `target`.
    #[must_use]
    pub fn get(&self, target: TypeKey) -> Option<&ConverterFn> {
        self.entries.get(&target)
    }

    /// Reports whether a converter is registered for `target`.
    #[must_use]
    pub fn contains(&self, target: TypeKey) -> bool {
        self.entries.contains_key(&target)
    }

    /// Number of registered converters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no converter is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the registered target types.
    pub fn keys(&self) -> impl Iterator<Item = TypeKey> + '_ {
        self.entries.keys().copied()
    }
}

impl fmt::Debug for Converters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("Converters")
            .field("targets", &keys)
            .finish()
    }
}

impl Extend<(TypeKey, ConverterFn)> for Converters {
    fn extend<I: IntoIterator<Item = (TypeKey, ConverterFn)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<(TypeKey, ConverterFn)> for Converters {
    fn from_iter<I: IntoIterator<Item = (TypeKey, ConverterFn)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

static DEFAULTS: LazyLock<Converters> = LazyLock::new(builtin::table);

/// Returns the process-wide default converters.
///
/// With the `chrono` feature enabled this holds the timestamp converters
/// for `DateTime<Utc>` and `DateTime<FixedOffset>`.
#[must_use]
pub fn default_converters() -> &'static Converters {
    &DEFAULTS
}

/// Caller converters layered over the defaults for one mapping call.
#[derive(Clone, Copy, Debug)]
pub struct ConverterView<'a> {
    overrides: Option<&'a Converters>,
    defaults: &'a Converters,
}

impl<'a> ConverterView<'a> {
    /// Layers `overrides` over the process-wide defaults.
    #[must_use]
    pub fn new(overrides: Option<&'a Converters>) -> Self {
        Self {
            overrides,
            defaults: default_converters(),
        }
    }

    /// Layers `overrides` over an explicit base table.
    #[must_use]
    pub const fn layered(overrides: Option<&'a Converters>, defaults: &'a Converters) -> Self {
        Self {
            overrides,
            defaults,
        }
    }

    /// Returns the converter for `target`, preferring caller entries.
    #[must_use]
    pub fn get(&self, target: TypeKey) -> Option<&'a ConverterFn> {
        self.overrides
            .and_then(|overrides| overrides.get(target))
            .or_else(|| self.defaults.get(target))
    }
}
