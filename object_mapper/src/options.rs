//! Per-call mapping options.
//!
//! [`MapOptions`] carries the list-error policy, the hook that observes
//! lenient element failures and the caller's converters. Host
//! applications that load their settings from a configuration file can
//! deserialize a [`MapperSettings`] and turn it into options.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::convert::{ConverterView, Converters};
use crate::error::MapError;
use crate::reflect::TypeKey;

/// How a failing list element affects the surrounding mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListErrorPolicy {
    /// The first failing element aborts the mapping.
    #[default]
    Strict,
    /// Failing elements are reported to the element hook and the remaining
    /// elements are still mapped. A failed element keeps whatever was
    /// written to it before the failure.
    Lenient,
}

/// A list element that could not be mapped under the lenient policy.
#[derive(Debug)]
pub struct ElementFailure {
    /// Position of the element in the source list.
    pub index: usize,
    /// Type of the target list.
    pub list_type: TypeKey,
    /// Why the element failed.
    pub error: MapError,
}

/// Callback observing lenient element failures.
pub type ElementHook = Arc<dyn Fn(&ElementFailure) + Send + Sync>;

/// Options for a mapping call.
///
/// # Examples
///
/// ```rust
/// use object_mapper::{ListErrorPolicy, MapOptions};
///
/// let options = MapOptions::new().with_list_errors(ListErrorPolicy::Lenient);
/// assert_eq!(options.list_errors(), ListErrorPolicy::Lenient);
/// ```
#[derive(Clone, Default)]
pub struct MapOptions {
    list_errors: ListErrorPolicy,
    element_hook: Option<ElementHook>,
    converters: Option<Converters>,
}

impl MapOptions {
    /// Options with the strict list policy and no caller converters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the list-error policy.
    #[must_use]
    pub fn with_list_errors(mut self, policy: ListErrorPolicy) -> Self {
        self.list_errors = policy;
        self
    }

    /// Replaces the hook that receives lenient element failures.
    ///
    /// Without a hook, failures are logged at `warn` level through
    /// `tracing`.
    #[must_use]
    pub fn with_element_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ElementFailure) + Send + Sync + 'static,
    {
        self.element_hook = Some(Arc::new(hook));
        self
    }

    /// Sets the caller converters, consulted before the defaults.
    #[must_use]
    pub fn with_converters(mut self, converters: Converters) -> Self {
        self.converters = Some(converters);
        self
    }

    /// The list-error policy.
    #[must_use]
    pub const fn list_errors(&self) -> ListErrorPolicy {
        self.list_errors
    }

    /// The caller converters, if any.
    #[must_use]
    pub const fn converters(&self) -> Option<&Converters> {
        self.converters.as_ref()
    }

    pub(crate) fn converter_view(&self) -> ConverterView<'_> {
        ConverterView::new(self.converters.as_ref())
    }

    pub(crate) fn report(&self, failure: &ElementFailure) {
        match &self.element_hook {
            Some(hook) => hook(failure),
            None => default_report(failure),
        }
    }
}

impl fmt::Debug for MapOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapOptions")
            .field("list_errors", &self.list_errors)
            .field(
                "element_hook",
                &self.element_hook.as_ref().map(|_| "<hook>"),
            )
            .field("converters", &self.converters)
            .finish()
    }
}

fn default_report(failure: &ElementFailure) {
    tracing::warn!(
        index = failure.index,
        list = %failure.list_type,
        path = %failure.error.path(),
        error = %failure.error,
        "skipping list element that failed to map"
    );
}

/// Serializable mapper settings.
///
/// # Examples
///
/// ```rust
/// use object_mapper::{ListErrorPolicy, MapperSettings};
///
/// let settings: MapperSettings = serde_json::from_str(r#"{"list_errors":"lenient"}"#)?;
/// assert_eq!(settings.into_options().list_errors(), ListErrorPolicy::Lenient);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapperSettings {
    /// Policy for failing list elements.
    pub list_errors: ListErrorPolicy,
}

impl MapperSettings {
    /// Builds options carrying these settings.
    #[must_use]
    pub fn into_options(self) -> MapOptions {
        MapOptions::from(self)
    }
}

impl From<MapperSettings> for MapOptions {
    fn from(settings: MapperSettings) -> Self {
        Self::new().with_list_errors(settings.list_errors)
    }
}
