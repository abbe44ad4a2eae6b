//! Timestamps from `chrono` are opaque: they are copied through the
//! built-in converters rather than field by field.

use std::any::Any;

use chrono::{DateTime, FixedOffset, Utc};

use super::{OpaqueValue, Reflect, ReflectMut, Reflected, ReflectedMut, TypeKey, assign_downcast};

macro_rules! reflect_timestamps {
    ($($tz:ty),* $(,)?) => {$(
        impl OpaqueValue for DateTime<$tz> {
            fn is_zero(&self) -> bool {
                *self == Self::default()
            }
        }

        impl Reflect for DateTime<$tz> {
            fn type_key(&self) -> TypeKey {
                TypeKey::of::<Self>()
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn reflect(&self) -> Reflected<'_> {
                Reflected::Opaque(self)
            }
        }

        impl ReflectMut for DateTime<$tz> {
            fn reflect_mut(&mut self) -> ReflectedMut<'_> {
                ReflectedMut::Opaque
            }

            fn assign_boxed(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
                assign_downcast(self, value)
            }
        }
    )*};
}

reflect_timestamps!(Utc, FixedOffset);
