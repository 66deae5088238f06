use core::fmt;

use crate::Shape;

/// A [`Poke`](crate::Poke) handle did something its shape said it would not.
///
/// Seeing one of these means a hand-written [`Scan`](crate::Scan)
/// implementation disagrees with its own [`Shape`].
#[derive(Debug, Clone)]
pub enum ReflectError {
    /// A map key was built from a string, but the key type is not `String`.
    KeyNotString {
        /// Shape of the map's key type.
        key_shape: &'static Shape,
    },

    /// The shape lists a field at this index, but the handle has none.
    NoSuchField {
        /// Shape of the struct.
        shape: &'static Shape,
        /// Index of the missing field.
        index: usize,
    },

    /// The shape said one kind of handle would be returned and another was.
    WasNotA {
        /// What the shape promised, e.g. `"list"`.
        expected: &'static str,
        /// The shape whose handle disagreed.
        actual: &'static Shape,
    },
}

impl fmt::Display for ReflectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectError::KeyNotString { key_shape } => {
                write!(f, "Map key type {key_shape} cannot be built from a string")
            }
            ReflectError::NoSuchField { shape, index } => {
                write!(f, "Struct {shape} has no field at index {index}")
            }
            ReflectError::WasNotA { expected, actual } => {
                write!(f, "Wanted a {expected} handle, got one for {actual}")
            }
        }
    }
}

impl core::error::Error for ReflectError {}
