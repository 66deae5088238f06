use crate::{Def, Poke, Scan, Shape};

// Raw pointers are describable but not writable: decoders reject them.

impl<T> Scan for *const T {
    const SHAPE: &'static Shape = &const { Shape::builder("*const _").def(Def::Undefined).build() };

    fn zero() -> Self {
        core::ptr::null()
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Opaque(Self::SHAPE)
    }
}

impl<T> Scan for *mut T {
    const SHAPE: &'static Shape = &const { Shape::builder("*mut _").def(Def::Undefined).build() };

    fn zero() -> Self {
        core::ptr::null_mut()
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Opaque(Self::SHAPE)
    }
}
