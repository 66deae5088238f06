use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Def;

/// Static description of a type that can be decoded into.
///
/// Every [`Scan`](crate::Scan) type exposes exactly one `Shape` through a
/// `&'static` constant, so shapes can be compared by address as well as by
/// value.
#[derive(Clone, Copy)]
pub struct Shape {
    /// Name of the type without generic arguments, e.g. `Vec` or `Point`.
    pub type_identifier: &'static str,

    /// Module the type was declared in, when known.
    ///
    /// Set by `#[derive(Scan)]`; left empty for standard library types.
    pub module_path: Option<&'static str>,

    /// How values of this type are laid out and written to.
    pub def: Def,
}

impl Shape {
    /// Starts building a shape for the given type identifier.
    pub const fn builder(type_identifier: &'static str) -> ShapeBuilder {
        ShapeBuilder {
            type_identifier,
            module_path: None,
            def: Def::Undefined,
        }
    }

    /// Returns true if both shapes describe the same type.
    pub fn is_same(&self, other: &Shape) -> bool {
        core::ptr::eq(self, other)
            || (self.type_identifier == other.type_identifier
                && self.module_path == other.module_path
                && self.to_string() == other.to_string())
    }

    /// Walks the type graph reachable from this shape and returns the first
    /// location whose shape is [`Def::Undefined`].
    ///
    /// Struct fields tagged `"-"` are never written to, so they are not
    /// visited. Each struct is visited at most once, which keeps the walk
    /// finite for self-referential types like `struct Node { next: Option<Box<Node>> }`.
    pub fn find_undefined(&'static self) -> Option<UndefinedLocation> {
        let mut path = String::new();
        let mut visited = Vec::new();
        find_undefined_in(self, &mut path, &mut visited)
    }
}

/// Where [`Shape::find_undefined`] found a shape nothing can decode into.
#[derive(Clone, Debug)]
pub struct UndefinedLocation {
    /// Path from the root, e.g. `.items[].ptr`. Empty for the root itself.
    pub path: String,

    /// The offending shape.
    pub shape: &'static Shape,
}

fn find_undefined_in(
    shape: &'static Shape,
    path: &mut String,
    visited: &mut Vec<(Option<&'static str>, &'static str)>,
) -> Option<UndefinedLocation> {
    match shape.def {
        Def::Undefined => Some(UndefinedLocation {
            path: path.clone(),
            shape,
        }),
        Def::Scalar(_) => None,
        Def::Struct(sd) => {
            let key = (shape.module_path, shape.type_identifier);
            if visited.contains(&key) {
                return None;
            }
            visited.push(key);

            for field in sd.fields.iter().filter(|field| !field.is_skipped()) {
                let found = descend(path, ".", field.name, field.shape(), visited);
                if found.is_some() {
                    return found;
                }
            }
            None
        }
        // Key types are checked by the map decoder itself.
        Def::Map(md) => descend(path, "{}", "", md.v, visited),
        Def::List(ld) => descend(path, "[]", "", ld.t, visited),
        Def::Array(ad) => descend(path, "[]", "", ad.t, visited),
        Def::Option(od) => find_undefined_in(od.t, path, visited),
        Def::Pointer(pd) => find_undefined_in(pd.pointee, path, visited),
    }
}

fn descend(
    path: &mut String,
    separator: &str,
    segment: &str,
    inner: &'static Shape,
    visited: &mut Vec<(Option<&'static str>, &'static str)>,
) -> Option<UndefinedLocation> {
    let len = path.len();
    path.push_str(separator);
    path.push_str(segment);
    let found = find_undefined_in(inner, path, visited);
    path.truncate(len);
    found
}

/// Const builder for [`Shape`].
#[derive(Clone, Copy)]
pub struct ShapeBuilder {
    type_identifier: &'static str,
    module_path: Option<&'static str>,
    def: Def,
}

impl ShapeBuilder {
    /// Sets the module the type was declared in.
    pub const fn module_path(mut self, module_path: &'static str) -> Self {
        self.module_path = Some(module_path);
        self
    }

    /// Sets the definition of the type.
    pub const fn def(mut self, def: Def) -> Self {
        self.def = def;
        self
    }

    /// Builds the shape.
    pub const fn build(self) -> Shape {
        Shape {
            type_identifier: self.type_identifier,
            module_path: self.module_path,
            def: self.def,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.def {
            Def::List(ld) => write!(f, "{}<{}>", self.type_identifier, ld.t),
            Def::Map(md) => write!(f, "{}<{}, {}>", self.type_identifier, md.k, md.v),
            Def::Array(ad) => write!(f, "[{}; {}]", ad.t, ad.n),
            Def::Option(od) => write!(f, "{}<{}>", self.type_identifier, od.t),
            Def::Pointer(pd) => write!(f, "{}<{}>", self.type_identifier, pd.pointee),
            Def::Scalar(_) | Def::Struct(_) | Def::Undefined => {
                f.write_str(self.type_identifier)
            }
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Shape")
                .field("type_identifier", &self.type_identifier)
                .field("module_path", &self.module_path)
                .field("def", &self.def)
                .finish()
        } else {
            write!(f, "Shape({self})")
        }
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Shape {}
