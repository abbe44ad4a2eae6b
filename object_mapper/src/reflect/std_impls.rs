//! Reflection for primitives and standard library containers.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::{
    ListSource, ListTarget, MapSource, OptionalTarget, Reflect, ReflectMut, Reflected,
    ReflectedMut, Scalar, TypeKey, assign_downcast,
};

macro_rules! reflect_scalars {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl Reflect for $ty {
            fn type_key(&self) -> TypeKey {
                TypeKey::of::<Self>()
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn reflect(&self) -> Reflected<'_> {
                Reflected::Scalar(Scalar::$variant(*self))
            }
        }

        impl ReflectMut for $ty {
            fn reflect_mut(&mut self) -> ReflectedMut<'_> {
                ReflectedMut::Passthrough(self)
            }

            fn assign_boxed(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
                assign_downcast(self, value)
            }
        }
    )*};
}

reflect_scalars! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
}

impl Reflect for String {
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn reflect(&self) -> Reflected<'_> {
        Reflected::Str(self)
    }
}

impl ReflectMut for String {
    fn reflect_mut(&mut self) -> ReflectedMut<'_> {
        ReflectedMut::String(self)
    }

    fn assign_boxed(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        assign_downcast(self, value)
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn reflect(&self) -> Reflected<'_> {
        Reflected::Optional(self.as_ref().map(|value| value as &dyn Reflect))
    }
}

impl<T: ReflectMut + Default> ReflectMut for Option<T> {
    fn reflect_mut(&mut self) -> ReflectedMut<'_> {
        ReflectedMut::Optional(self)
    }

    /// Accepts either a whole `Option<T>` or a bare `T`, which is wrapped.
    fn assign_boxed(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        match value.downcast::<Self>() {
            Ok(whole) => {
                *self = *whole;
                Ok(())
            }
            Err(other) => {
                *self = Some(*other.downcast::<T>()?);
                Ok(())
            }
        }
    }
}

impl<T: ReflectMut + Default> OptionalTarget for Option<T> {
    fn clear(&mut self) {
        *self = None;
    }

    fn fresh(&mut self) -> &mut dyn ReflectMut {
        self.insert(T::default())
    }
}

// Boxes are transparent: they report and accept their content.
impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn type_key(&self) -> TypeKey {
        (**self).type_key()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn reflect(&self) -> Reflected<'_> {
        (**self).reflect()
    }
}

impl<T: ReflectMut + ?Sized> ReflectMut for Box<T> {
    fn reflect_mut(&mut self) -> ReflectedMut<'_> {
        (**self).reflect_mut()
    }

    fn assign_boxed(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        (**self).assign_boxed(value)
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn reflect(&self) -> Reflected<'_> {
        Reflected::List(self)
    }
}

impl<T: Reflect> ListSource for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|value| value as &dyn Reflect)
    }
}

impl<T: ReflectMut + Default> ReflectMut for Vec<T> {
    fn reflect_mut(&mut self) -> ReflectedMut<'_> {
        ReflectedMut::List(self)
    }

    fn assign_boxed(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        assign_downcast(self, value)
    }
}

impl<T: ReflectMut + Default> ListTarget for Vec<T> {
    fn reset(&mut self, len: usize) {
        self.clear();
        self.resize_with(len, T::default);
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn ReflectMut> {
        self.get_mut(index)
            .map(|element| element as &mut dyn ReflectMut)
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: Reflect,
    V: Reflect,
    S: 'static,
{
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn reflect(&self) -> Reflected<'_> {
        Reflected::Map(self)
    }
}

impl<K, V, S> MapSource for HashMap<K, V, S>
where
    K: Reflect,
    V: Reflect,
{
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn entries(&self) -> Vec<(&dyn Reflect, &dyn Reflect)> {
        self.iter()
            .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect))
            .collect()
    }
}

impl<K, V, S> ReflectMut for HashMap<K, V, S>
where
    K: Reflect + Clone + Eq + Hash,
    V: Reflect + Clone,
    S: BuildHasher + Clone + Default + 'static,
{
    fn reflect_mut(&mut self) -> ReflectedMut<'_> {
        ReflectedMut::Passthrough(self)
    }

    fn assign_boxed(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        assign_downcast(self, value)
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn reflect(&self) -> Reflected<'_> {
        Reflected::Map(self)
    }
}

impl<K: Reflect, V: Reflect> MapSource for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entries(&self) -> Vec<(&dyn Reflect, &dyn Reflect)> {
        self.iter()
            .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect))
            .collect()
    }
}

impl<K, V> ReflectMut for BTreeMap<K, V>
where
    K: Reflect + Clone + Ord,
    V: Reflect + Clone,
{
    fn reflect_mut(&mut self) -> ReflectedMut<'_> {
        ReflectedMut::Passthrough(self)
    }

    fn assign_boxed(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        assign_downcast(self, value)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn reflect(&self) -> Reflected<'_> {
        Reflected::List(self)
    }
}

impl<T: Reflect, const N: usize> ListSource for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|value| value as &dyn Reflect)
    }
}
