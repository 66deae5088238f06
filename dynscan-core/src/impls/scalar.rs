use alloc::string::String;

use crate::{Def, Poke, PokeScalar, ScalarType, Scan, Shape};

macro_rules! impl_scan_for_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Scan for $ty {
                const SHAPE: &'static Shape = &const {
                    Shape::builder(ScalarType::$variant.name())
                        .def(Def::Scalar(ScalarType::$variant))
                        .build()
                };

                fn zero() -> Self {
                    <$ty>::default()
                }

                fn poke(&mut self) -> Poke<'_> {
                    Poke::Scalar(PokeScalar::$variant(self))
                }
            }
        )*
    };
}

impl_scan_for_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => ISize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => USize,
    f32 => F32,
    f64 => F64,
    String => String,
}
