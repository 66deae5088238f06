use crate::{Def, OptionDef, Poke, PokePointer, Scan, Shape};

impl<T: Scan> Scan for Option<T> {
    const SHAPE: &'static Shape = &const {
        Shape::builder("Option")
            .def(Def::Option(OptionDef::new(T::SHAPE)))
            .build()
    };

    fn zero() -> Self {
        None
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Pointer(self)
    }
}

impl<T: Scan> PokePointer for Option<T> {
    fn shape(&self) -> &'static Shape {
        <Self as Scan>::SHAPE
    }

    fn is_nullable(&self) -> bool {
        true
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn allocate(&mut self) {
        if self.is_none() {
            *self = Some(T::zero());
        }
    }

    fn set_null(&mut self) {
        *self = None;
    }

    fn pointee(&mut self) -> Poke<'_> {
        self.get_or_insert_with(T::zero).poke()
    }
}
