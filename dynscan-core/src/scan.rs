use crate::{Poke, Shape};

/// A type a decoder can write into.
///
/// Implementors describe themselves with a static [`Shape`] and hand out a
/// [`Poke`] handle that matches it: a type whose shape is
/// [`Def::List`](crate::Def::List) must return [`Poke::List`], and so on.
///
/// Implement it with `#[derive(Scan)]` for structs with named fields.
pub trait Scan: Sized {
    /// The shape of this type.
    const SHAPE: &'static Shape;

    /// The value a freshly allocated slot starts out as: zero for numbers,
    /// empty for strings and containers, `None` for options.
    fn zero() -> Self;

    /// A mutable handle to this value.
    fn poke(&mut self) -> Poke<'_>;
}
