use crate::{ArrayDef, Def, Poke, PokeArray, Scan, Shape};

impl<T: Scan, const N: usize> Scan for [T; N] {
    const SHAPE: &'static Shape = &const {
        Shape::builder("[_; _]")
            .def(Def::Array(ArrayDef::new(T::SHAPE, N)))
            .build()
    };

    fn zero() -> Self {
        core::array::from_fn(|_| T::zero())
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Array(self)
    }
}

impl<T: Scan, const N: usize> PokeArray for [T; N] {
    fn shape(&self) -> &'static Shape {
        <Self as Scan>::SHAPE
    }

    fn len(&self) -> usize {
        N
    }

    fn begin_item(&mut self, index: usize) -> Option<Poke<'_>> {
        let slot = self.get_mut(index)?;
        *slot = T::zero();
        Some(slot.poke())
    }
}
