use alloc::boxed::Box;

use crate::{Def, PointerDef, Poke, PokePointer, Scan, Shape};

impl<T: Scan> Scan for Box<T> {
    const SHAPE: &'static Shape = &const {
        Shape::builder("Box")
            .def(Def::Pointer(PointerDef::new(T::SHAPE)))
            .build()
    };

    fn zero() -> Self {
        Box::new(T::zero())
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Pointer(self)
    }
}

impl<T: Scan> PokePointer for Box<T> {
    fn shape(&self) -> &'static Shape {
        <Self as Scan>::SHAPE
    }

    fn is_nullable(&self) -> bool {
        false
    }

    fn is_null(&self) -> bool {
        false
    }

    fn allocate(&mut self) {}

    fn set_null(&mut self) {}

    fn pointee(&mut self) -> Poke<'_> {
        Scan::poke(&mut **self)
    }
}
