//! Mutable handles onto values that implement [`Scan`].

use alloc::boxed::Box;
use alloc::string::String;

use crate::{ReflectError, ScalarType, Scan, Shape};

/// A mutable handle onto a value, classified by what can be done with it.
///
/// Handles borrow their target exclusively for `'mem` and never own it.
pub enum Poke<'mem> {
    /// A primitive location.
    Scalar(PokeScalar<'mem>),

    /// A struct with named fields.
    Struct(&'mem mut dyn PokeStruct),

    /// A mapping.
    Map(&'mem mut dyn PokeMap),

    /// A growable sequence.
    List(&'mem mut dyn PokeList),

    /// A fixed-capacity array.
    Array(&'mem mut dyn PokeArray),

    /// An indirection layer: `Option<T>` or `Box<T>`.
    Pointer(&'mem mut dyn PokePointer),

    /// A location nothing can be written through.
    Opaque(&'static Shape),
}

impl Poke<'_> {
    /// Shape of the value behind this handle.
    pub fn shape(&self) -> &'static Shape {
        match self {
            Poke::Scalar(scalar) => scalar.shape(),
            Poke::Struct(ps) => ps.shape(),
            Poke::Map(pm) => pm.shape(),
            Poke::List(pl) => pl.shape(),
            Poke::Array(pa) => pa.shape(),
            Poke::Pointer(pp) => pp.shape(),
            Poke::Opaque(shape) => shape,
        }
    }
}

/// A mutable reference to one primitive.
#[allow(missing_docs)]
pub enum PokeScalar<'mem> {
    Bool(&'mem mut bool),
    I8(&'mem mut i8),
    I16(&'mem mut i16),
    I32(&'mem mut i32),
    I64(&'mem mut i64),
    I128(&'mem mut i128),
    ISize(&'mem mut isize),
    U8(&'mem mut u8),
    U16(&'mem mut u16),
    U32(&'mem mut u32),
    U64(&'mem mut u64),
    U128(&'mem mut u128),
    USize(&'mem mut usize),
    F32(&'mem mut f32),
    F64(&'mem mut f64),
    String(&'mem mut String),
}

impl PokeScalar<'_> {
    /// Which primitive this is.
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            PokeScalar::Bool(_) => ScalarType::Bool,
            PokeScalar::I8(_) => ScalarType::I8,
            PokeScalar::I16(_) => ScalarType::I16,
            PokeScalar::I32(_) => ScalarType::I32,
            PokeScalar::I64(_) => ScalarType::I64,
            PokeScalar::I128(_) => ScalarType::I128,
            PokeScalar::ISize(_) => ScalarType::ISize,
            PokeScalar::U8(_) => ScalarType::U8,
            PokeScalar::U16(_) => ScalarType::U16,
            PokeScalar::U32(_) => ScalarType::U32,
            PokeScalar::U64(_) => ScalarType::U64,
            PokeScalar::U128(_) => ScalarType::U128,
            PokeScalar::USize(_) => ScalarType::USize,
            PokeScalar::F32(_) => ScalarType::F32,
            PokeScalar::F64(_) => ScalarType::F64,
            PokeScalar::String(_) => ScalarType::String,
        }
    }

    /// Shape of the primitive.
    pub fn shape(&self) -> &'static Shape {
        match self {
            PokeScalar::Bool(_) => bool::SHAPE,
            PokeScalar::I8(_) => i8::SHAPE,
            PokeScalar::I16(_) => i16::SHAPE,
            PokeScalar::I32(_) => i32::SHAPE,
            PokeScalar::I64(_) => i64::SHAPE,
            PokeScalar::I128(_) => i128::SHAPE,
            PokeScalar::ISize(_) => isize::SHAPE,
            PokeScalar::U8(_) => u8::SHAPE,
            PokeScalar::U16(_) => u16::SHAPE,
            PokeScalar::U32(_) => u32::SHAPE,
            PokeScalar::U64(_) => u64::SHAPE,
            PokeScalar::U128(_) => u128::SHAPE,
            PokeScalar::USize(_) => usize::SHAPE,
            PokeScalar::F32(_) => f32::SHAPE,
            PokeScalar::F64(_) => f64::SHAPE,
            PokeScalar::String(_) => String::SHAPE,
        }
    }
}

/// Write access to the fields of a struct.
pub trait PokeStruct {
    /// Shape of the struct; its [`Def`](crate::Def) must be `Struct`.
    fn shape(&self) -> &'static Shape;

    /// Handle onto the field at `index`, in the order of
    /// [`StructDef::fields`](crate::StructDef::fields).
    fn field(&mut self, index: usize) -> Option<Poke<'_>>;
}

/// Write access to a mapping.
pub trait PokeMap {
    /// Shape of the map; its [`Def`](crate::Def) must be `Map`.
    fn shape(&self) -> &'static Shape;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Whether the map has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Starts a new entry holding a zero value.
    ///
    /// Nothing is inserted until [`PokeEntry::insert`] is called; dropping
    /// the entry discards it.
    fn begin_entry(&mut self) -> Box<dyn PokeEntry + '_>;
}

/// A pending map entry, see [`PokeMap::begin_entry`].
pub trait PokeEntry {
    /// Handle onto the entry's value.
    fn value(&mut self) -> Poke<'_>;

    /// Inserts the value under `key`, replacing any previous value.
    fn insert(self: Box<Self>, key: &str) -> Result<(), ReflectError>;
}

/// Write access to a growable sequence.
pub trait PokeList {
    /// Shape of the list; its [`Def`](crate::Def) must be `List`.
    fn shape(&self) -> &'static Shape;

    /// Number of items.
    fn len(&self) -> usize;

    /// Whether the list has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of items the current backing storage holds.
    fn capacity(&self) -> usize;

    /// Drops all items, keeping the backing storage.
    fn clear(&mut self);

    /// Moves the items into new backing storage of exactly `capacity` slots.
    /// Does nothing if `capacity` is below the current length.
    fn reallocate(&mut self, capacity: usize);

    /// Appends a zero item.
    fn push_zero(&mut self);

    /// Handle onto the item at `index`.
    fn item(&mut self, index: usize) -> Option<Poke<'_>>;
}

/// Write access to a fixed-capacity array.
pub trait PokeArray {
    /// Shape of the array; its [`Def`](crate::Def) must be `Array`.
    fn shape(&self) -> &'static Shape;

    /// Number of slots.
    fn len(&self) -> usize;

    /// Whether the array has no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resets the slot at `index` to zero and returns a handle onto it.
    ///
    /// Returns `None` when the index is out of range, or when the array
    /// cannot hand out handles onto its slots at all.
    fn begin_item(&mut self, index: usize) -> Option<Poke<'_>>;
}

/// Write access through an indirection layer.
pub trait PokePointer {
    /// Shape of the layer; its [`Def`](crate::Def) is `Option` or `Pointer`.
    fn shape(&self) -> &'static Shape;

    /// Whether the layer can be empty.
    fn is_nullable(&self) -> bool;

    /// Whether the layer is currently empty.
    fn is_null(&self) -> bool;

    /// Fills an empty layer with a zero value. Does nothing otherwise.
    fn allocate(&mut self);

    /// Empties the layer. Does nothing if it is not nullable.
    fn set_null(&mut self);

    /// Handle onto the pointee, allocating it first if the layer is empty.
    fn pointee(&mut self) -> Poke<'_>;
}
