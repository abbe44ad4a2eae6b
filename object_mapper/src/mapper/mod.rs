//! Entry points for mapping a source value into a target.

use crate::convert::Converters;
use crate::error::{Argument, MapError, MapResult};
use crate::options::MapOptions;
use crate::reflect::{Reflect, ReflectMut};

mod dispatch;

/// Maps `source` into `target` with the default options.
///
/// Record fields are matched by name, honouring `#[mapper(...)]`
/// redirections on the target. On failure the target keeps every value
/// written before the failing field.
///
/// # Errors
///
/// Returns a [`MapError`] when a source value cannot be mapped into the
/// slot that should receive it.
pub fn map(source: &dyn Reflect, target: &mut dyn ReflectMut) -> MapResult<()> {
    map_with_options(source, target, &MapOptions::default())
}

/// Maps `source` into `target`, consulting `converters` before the
/// default converters.
///
/// # Errors
///
/// See [`map`]; converter failures surface as [`MapError::Conversion`].
pub fn map_with_converters(
    source: &dyn Reflect,
    target: &mut dyn ReflectMut,
    converters: Converters,
) -> MapResult<()> {
    map_with_options(
        source,
        target,
        &MapOptions::new().with_converters(converters),
    )
}

/// Maps `source` into `target` using `options`.
///
/// # Errors
///
/// See [`map`].
pub fn map_with_options(
    source: &dyn Reflect,
    target: &mut dyn ReflectMut,
    options: &MapOptions,
) -> MapResult<()> {
    dispatch::Context::new(options).map_slot(source, target)
}

/// The location a dynamic mapping writes to.
pub enum Destination<'a> {
    /// A slot the mapper may fill.
    Mutable(&'a mut dyn ReflectMut),
    /// A value only available by shared reference; rejected.
    Shared(&'a dyn Reflect),
}

impl<'a, T: ReflectMut> From<&'a mut T> for Destination<'a> {
    fn from(target: &'a mut T) -> Self {
        Self::Mutable(target)
    }
}

impl<'a, T: Reflect> From<&'a T> for Destination<'a> {
    fn from(target: &'a T) -> Self {
        Self::Shared(target)
    }
}

/// Maps type-erased arguments, validating them first.
///
/// The target is checked before the source, and nothing is written
/// unless both are usable.
///
/// # Errors
///
/// Returns [`MapError::NilArgument`] when an argument is absent,
/// [`MapError::TargetNotAddressable`] for a [`Destination::Shared`]
/// target, and otherwise the errors of [`map`].
///
/// # Examples
///
/// ```rust
/// use object_mapper::{Argument, Destination, MapError, MapOptions, map_dynamic};
///
/// let source = 5_u32;
/// let frozen = 0_u32;
/// let err = map_dynamic(Some(&source), Some(Destination::from(&frozen)), &MapOptions::new())
///     .unwrap_err();
/// assert!(matches!(err, MapError::TargetNotAddressable));
///
/// let err = map_dynamic(Some(&source), None, &MapOptions::new()).unwrap_err();
/// assert!(matches!(err, MapError::NilArgument { argument: Argument::Target }));
/// ```
pub fn map_dynamic(
    source: Option<&dyn Reflect>,
    target: Option<Destination<'_>>,
    options: &MapOptions,
) -> MapResult<()> {
    let slot = match target {
        None => {
            return Err(MapError::NilArgument {
                argument: Argument::Target,
            });
        }
        Some(Destination::Shared(_)) => return Err(MapError::TargetNotAddressable),
        Some(Destination::Mutable(slot)) => slot,
    };
    let value = source.ok_or(MapError::NilArgument {
        argument: Argument::Source,
    })?;
    map_with_options(value, slot, options)
}

/// A reusable mapper holding its options.
///
/// # Examples
///
/// ```rust
/// use object_mapper::{ListErrorPolicy, MapOptions, Mapper};
///
/// let mapper = Mapper::new(MapOptions::new().with_list_errors(ListErrorPolicy::Lenient));
/// let mut target: Vec<u8> = Vec::new();
/// mapper.map(&vec![1_u8, 2], &mut target)?;
/// assert_eq!(target, [1, 2]);
/// # Ok::<(), object_mapper::MapError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    options: MapOptions,
}

impl Mapper {
    /// Creates a mapper using `options` for every call.
    #[must_use]
    pub const fn new(options: MapOptions) -> Self {
        Self { options }
    }

    /// The options applied to each call.
    #[must_use]
    pub const fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Maps `source` into `target`.
    ///
    /// # Errors
    ///
    /// See [`map`].
    pub fn map(&self, source: &dyn Reflect, target: &mut dyn ReflectMut) -> MapResult<()> {
        map_with_options(source, target, &self.options)
    }
}

impl From<MapOptions> for Mapper {
    fn from(options: MapOptions) -> Self {
        Self::new(options)
    }
}
