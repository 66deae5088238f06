use alloc::vec::Vec;

use crate::{Def, ListDef, Poke, PokeList, Scan, Shape};

impl<T: Scan> Scan for Vec<T> {
    const SHAPE: &'static Shape = &const {
        Shape::builder("Vec")
            .def(Def::List(ListDef::new(T::SHAPE)))
            .build()
    };

    fn zero() -> Self {
        Vec::new()
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::List(self)
    }
}

impl<T: Scan> PokeList for Vec<T> {
    fn shape(&self) -> &'static Shape {
        <Self as Scan>::SHAPE
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn reallocate(&mut self, capacity: usize) {
        if capacity < Vec::len(self) {
            return;
        }
        let mut grown = Vec::with_capacity(capacity);
        grown.append(self);
        *self = grown;
    }

    fn push_zero(&mut self) {
        self.push(T::zero());
    }

    fn item(&mut self, index: usize) -> Option<Poke<'_>> {
        self.get_mut(index).map(|item| item.poke())
    }
}
