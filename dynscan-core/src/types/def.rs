use core::fmt;

use crate::{Field, ScalarType, Shape};

/// How a type is written to.
///
/// The decode engine branches on this and nothing else.
#[derive(Clone, Copy)]
pub enum Def {
    /// No decode rule exists for this type.
    ///
    /// Raw pointers use this, as can custom types that want to be rejected
    /// by decoders up front.
    Undefined,

    /// A primitive: boolean, integer, float or string.
    Scalar(ScalarType),

    /// A struct with named fields.
    Struct(StructDef),

    /// A mapping from keys to values, e.g. `HashMap<K, V>`.
    Map(MapDef),

    /// A growable sequence, e.g. `Vec<T>`.
    List(ListDef),

    /// A fixed-capacity array, e.g. `[T; N]`.
    Array(ArrayDef),

    /// A nullable indirection layer, e.g. `Option<T>`.
    Option(OptionDef),

    /// A non-nullable indirection layer, e.g. `Box<T>`.
    Pointer(PointerDef),
}

impl Def {
    /// Short name of the definition kind, used in diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Def::Undefined => "undefined",
            Def::Scalar(_) => "scalar",
            Def::Struct(_) => "struct",
            Def::Map(_) => "map",
            Def::List(_) => "list",
            Def::Array(_) => "array",
            Def::Option(_) => "option",
            Def::Pointer(_) => "pointer",
        }
    }
}

impl fmt::Debug for Def {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Def::Undefined => f.write_str("Undefined"),
            Def::Scalar(st) => write!(f, "Scalar({st})"),
            Def::Struct(sd) => f
                .debug_list()
                .entries(sd.fields.iter().map(|field| field.name))
                .finish(),
            Def::Map(md) => write!(f, "Map<{}, {}>", md.k, md.v),
            Def::List(ld) => write!(f, "List<{}>", ld.t),
            Def::Array(ad) => write!(f, "Array<{}; {}>", ad.t, ad.n),
            Def::Option(od) => write!(f, "Option<{}>", od.t),
            Def::Pointer(pd) => write!(f, "Pointer<{}>", pd.pointee),
        }
    }
}

/// Fields of a struct, in declaration order.
#[derive(Clone, Copy, Debug)]
pub struct StructDef {
    /// All fields, including skipped ones.
    pub fields: &'static [Field],
}

impl StructDef {
    /// Const ctor.
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }
}

/// Key and value shapes of a map.
#[derive(Clone, Copy, Debug)]
pub struct MapDef {
    /// shape of the keys
    pub k: &'static Shape,

    /// shape of the values
    pub v: &'static Shape,
}

impl MapDef {
    /// Const ctor.
    pub const fn new(k: &'static Shape, v: &'static Shape) -> Self {
        Self { k, v }
    }
}

/// Item shape of a growable sequence.
#[derive(Clone, Copy, Debug)]
pub struct ListDef {
    /// shape of the items
    pub t: &'static Shape,
}

impl ListDef {
    /// Const ctor.
    pub const fn new(t: &'static Shape) -> Self {
        Self { t }
    }
}

/// Item shape and length of a fixed-capacity array.
#[derive(Clone, Copy, Debug)]
pub struct ArrayDef {
    /// shape of the items
    pub t: &'static Shape,

    /// number of slots
    pub n: usize,
}

impl ArrayDef {
    /// Const ctor.
    pub const fn new(t: &'static Shape, n: usize) -> Self {
        Self { t, n }
    }
}

/// Inner shape of a nullable layer.
#[derive(Clone, Copy, Debug)]
pub struct OptionDef {
    /// shape of the inner type (the `T` in `Option<T>`)
    pub t: &'static Shape,
}

impl OptionDef {
    /// Const ctor.
    pub const fn new(t: &'static Shape) -> Self {
        Self { t }
    }
}

/// Pointee shape of a non-nullable layer.
#[derive(Clone, Copy, Debug)]
pub struct PointerDef {
    /// shape of the pointee (the `T` in `Box<T>`)
    pub pointee: &'static Shape,
}

impl PointerDef {
    /// Const ctor.
    pub const fn new(pointee: &'static Shape) -> Self {
        Self { pointee }
    }
}
