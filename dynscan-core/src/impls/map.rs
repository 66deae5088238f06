use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;
use std::collections::HashMap;

use crate::{Def, MapDef, Poke, PokeEntry, PokeMap, PokeScalar, ReflectError, Scan, Shape};

/// Builds a map key of type `K` from a string.
///
/// Only `String` keys are supported; the key is built by writing through
/// `K`'s own handle, so newtypes and other shapes are refused.
fn key_from_str<K: Scan>(key: &str) -> Result<K, ReflectError> {
    let mut k = K::zero();
    match k.poke() {
        Poke::Scalar(PokeScalar::String(slot)) => {
            key.clone_into(slot);
        }
        _ => {
            return Err(ReflectError::KeyNotString {
                key_shape: K::SHAPE,
            });
        }
    }
    Ok(k)
}

trait InsertEntry<K, V> {
    fn insert_entry(&mut self, key: K, value: V);
}

impl<K: Eq + Hash, V, S: BuildHasher> InsertEntry<K, V> for HashMap<K, V, S> {
    fn insert_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> InsertEntry<K, V> for BTreeMap<K, V> {
    fn insert_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

struct MapEntry<'m, M, K, V> {
    map: &'m mut M,
    value: V,
    key: PhantomData<fn() -> K>,
}

impl<'m, M, K, V> MapEntry<'m, M, K, V>
where
    V: Scan,
{
    fn new(map: &'m mut M) -> Self {
        Self {
            map,
            value: V::zero(),
            key: PhantomData,
        }
    }
}

impl<M, K, V> PokeEntry for MapEntry<'_, M, K, V>
where
    M: InsertEntry<K, V>,
    K: Scan,
    V: Scan,
{
    fn value(&mut self) -> Poke<'_> {
        self.value.poke()
    }

    fn insert(self: Box<Self>, key: &str) -> Result<(), ReflectError> {
        let MapEntry { map, value, .. } = *self;
        map.insert_entry(key_from_str::<K>(key)?, value);
        Ok(())
    }
}

impl<K, V, S> Scan for HashMap<K, V, S>
where
    K: Scan + Eq + Hash,
    V: Scan,
    S: BuildHasher + Default,
{
    const SHAPE: &'static Shape = &const {
        Shape::builder("HashMap")
            .def(Def::Map(MapDef::new(K::SHAPE, V::SHAPE)))
            .build()
    };

    fn zero() -> Self {
        HashMap::default()
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Map(self)
    }
}

impl<K, V, S> PokeMap for HashMap<K, V, S>
where
    K: Scan + Eq + Hash,
    V: Scan,
    S: BuildHasher + Default,
{
    fn shape(&self) -> &'static Shape {
        <Self as Scan>::SHAPE
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn begin_entry(&mut self) -> Box<dyn PokeEntry + '_> {
        Box::new(MapEntry::<_, K, V>::new(self))
    }
}

impl<K, V> Scan for BTreeMap<K, V>
where
    K: Scan + Ord,
    V: Scan,
{
    const SHAPE: &'static Shape = &const {
        Shape::builder("BTreeMap")
            .def(Def::Map(MapDef::new(K::SHAPE, V::SHAPE)))
            .build()
    };

    fn zero() -> Self {
        BTreeMap::new()
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Map(self)
    }
}

impl<K, V> PokeMap for BTreeMap<K, V>
where
    K: Scan + Ord,
    V: Scan,
{
    fn shape(&self) -> &'static Shape {
        <Self as Scan>::SHAPE
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn begin_entry(&mut self) -> Box<dyn PokeEntry + '_> {
        Box::new(MapEntry::<_, K, V>::new(self))
    }
}
