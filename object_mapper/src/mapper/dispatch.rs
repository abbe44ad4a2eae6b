//! Shape-driven dispatch over target slots.

use std::any::Any;

use crate::convert::{ConverterFn, ConverterView};
use crate::descriptor::RecordTarget;
use crate::error::{MapError, MapResult};
use crate::options::{ElementFailure, ListErrorPolicy, MapOptions};
use crate::reflect::{
    ListTarget, OptionalTarget, Reflect, ReflectMut, Reflected, ReflectedMut, ShapeKind, Slot,
    TypeKey, render,
};
use crate::resolver::resolve_source_field;

pub(super) struct Context<'a> {
    converters: ConverterView<'a>,
    options: &'a MapOptions,
}

impl<'a> Context<'a> {
    pub(super) fn new(options: &'a MapOptions) -> Self {
        Self {
            converters: options.converter_view(),
            options,
        }
    }

    /// Fills `target` from `source`, preferring a converter registered for
    /// the target's type over structural mapping.
    pub(super) fn map_slot(
        &self,
        source: &dyn Reflect,
        target: &mut dyn ReflectMut,
    ) -> MapResult<()> {
        let key = target.type_key();
        if let Some(converter) = self.converters.get(key) {
            let optional = matches!(target.reflect_mut(), ReflectedMut::Optional(_));
            let input = if optional { Some(source) } else { indirect(source) };
            return match input {
                Some(value) => convert_into(converter, key, value, target),
                None => Ok(()),
            };
        }

        match target.reflect_mut() {
            ReflectedMut::Optional(slot) => self.map_to_optional(source, slot),
            ReflectedMut::Record(record) => self.map_to_record(source, record),
            ReflectedMut::List(list) => self.map_to_list(source, list, key),
            ReflectedMut::String(text) => {
                *text = indirect(source).map(render).unwrap_or_default();
                Ok(())
            }
            ReflectedMut::Passthrough(slot) => assign(source, slot, key),
            ReflectedMut::Opaque => match indirect(source) {
                Some(_) => Err(MapError::MissingConverter { target: key }),
                None => Ok(()),
            },
        }
    }

    fn map_to_optional(
        &self,
        source: &dyn Reflect,
        slot: &mut dyn OptionalTarget,
    ) -> MapResult<()> {
        if source.reflect().is_zero() {
            slot.clear();
            return Ok(());
        }
        let result = self.map_slot(source, slot.fresh());
        if result.is_err() {
            slot.clear();
        }
        result
    }

    fn map_to_record(
        &self,
        source: &dyn Reflect,
        target: &mut dyn RecordTarget,
    ) -> MapResult<()> {
        let Some(value) = indirect(source) else {
            return Ok(());
        };
        let Reflected::Record(record) = value.reflect() else {
            return Err(MapError::TypeMismatch {
                expected: ShapeKind::Record,
                actual: value.type_key(),
            });
        };
        let descriptor = target.descriptor();
        for (index, field) in descriptor.fields.iter().enumerate() {
            if !field.is_accessible() {
                tracing::trace!(
                    record = descriptor.type_name,
                    field = field.name,
                    access = ?field.access,
                    "skipping inaccessible field"
                );
                continue;
            }
            let Some(resolved) = resolve_source_field(record, field) else {
                tracing::trace!(
                    record = descriptor.type_name,
                    field = field.name,
                    source = %value.type_key(),
                    "no source value for field"
                );
                continue;
            };
            let Some(slot) = target.field_mut(index) else {
                continue;
            };
            self.map_slot(resolved.as_reflect(), slot)
                .map_err(|err| MapError::field(field.name, err))?;
        }
        Ok(())
    }

    fn map_to_list(
        &self,
        source: &dyn Reflect,
        target: &mut dyn ListTarget,
        list_type: TypeKey,
    ) -> MapResult<()> {
        let Some(value) = indirect(source) else {
            target.reset(0);
            return Ok(());
        };
        let Reflected::List(items) = value.reflect() else {
            return Err(MapError::TypeMismatch {
                expected: ShapeKind::List,
                actual: value.type_key(),
            });
        };
        target.reset(items.len());
        for index in 0..items.len() {
            let (Some(item), Some(slot)) = (items.get(index), target.element_mut(index)) else {
                continue;
            };
            let Err(error) = self.map_slot(item, slot) else {
                continue;
            };
            match self.options.list_errors() {
                ListErrorPolicy::Strict => return Err(MapError::element(index, error)),
                ListErrorPolicy::Lenient => self.options.report(&ElementFailure {
                    index,
                    list_type,
                    error,
                }),
            }
        }
        Ok(())
    }
}

/// Follows non-empty optionals down to a concrete value.
///
/// Returns `None` when an empty optional is reached.
fn indirect(mut value: &dyn Reflect) -> Option<&dyn Reflect> {
    while let Reflected::Optional(inner) = value.reflect() {
        value = inner?;
    }
    Some(value)
}

fn assign(source: &dyn Reflect, slot: &mut dyn Slot, target: TypeKey) -> MapResult<()> {
    let Some(value) = indirect(source) else {
        slot.reset();
        return Ok(());
    };
    if slot.assign_from(value.as_any()) {
        Ok(())
    } else {
        Err(MapError::IncompatibleAssignment {
            target,
            source_type: value.type_key(),
        })
    }
}

fn convert_into(
    converter: &ConverterFn,
    target_type: TypeKey,
    source: &dyn Reflect,
    target: &mut dyn ReflectMut,
) -> MapResult<()> {
    tracing::debug!(
        target_type = %target_type,
        source_type = %source.type_key(),
        "applying converter"
    );
    let value: Box<dyn Any> = converter(source).map_err(|err| MapError::Conversion {
        target: target_type,
        source: err,
    })?;
    target
        .assign_boxed(value)
        .map_err(|_| MapError::IncompatibleAssignment {
            target: target_type,
            source_type: source.type_key(),
        })
}
