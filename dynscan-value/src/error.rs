use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use dynscan_core::{Def, ReflectError, ScalarType, Shape};

use crate::{Value, ValueType};

/// A segment in a decode path
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// An object key, for struct fields and map entries
    Field(String),
    /// An index in an array
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{name}"),
            PathSegment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// Error returned when a [`Value`] cannot be decoded into a destination.
#[derive(Debug)]
pub struct DecodeError {
    /// The specific kind of error
    pub kind: DecodeErrorKind,
    /// Path through the source value where the error occurred
    pub path: Vec<PathSegment>,
    /// The root type being decoded into
    pub target_shape: Option<&'static Shape>,
}

impl DecodeError {
    /// Create a new DecodeError with an empty path
    pub fn new(kind: DecodeErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
            target_shape: None,
        }
    }

    /// Set the root shape
    pub fn with_shape(mut self, shape: &'static Shape) -> Self {
        self.target_shape = Some(shape);
        self
    }

    /// Add a path segment (prepends since we unwind from the error site)
    pub fn with_path(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }

    /// Format the path as a string
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            "<root>".into()
        } else {
            use core::fmt::Write;
            let mut s = String::new();
            for seg in &self.path {
                let _ = write!(s, "{seg}");
            }
            s
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "at {}: {}", self.path_string(), self.kind)
        }
    }
}

impl core::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.kind {
            DecodeErrorKind::Reflect(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ReflectError> for DecodeError {
    fn from(err: ReflectError) -> Self {
        DecodeError::new(DecodeErrorKind::Reflect(err))
    }
}

/// Specific error kinds for decoding.
#[derive(Debug)]
pub enum DecodeErrorKind {
    /// The value's kind does not fit the destination.
    ShapeMismatch {
        /// The destination shape
        expected: &'static Shape,
        /// What the value actually was
        got: ValueType,
        /// The offending value
        value: Value,
    },

    /// The destination, or something reachable from it, has no decode rule.
    UnsupportedDestination {
        /// Where in the type the shape sits, e.g. `.items[]`; empty for the root
        path: String,
        /// The unsupported shape
        shape: &'static Shape,
    },

    /// A map destination whose keys are not `String`.
    InvalidMapKeyType {
        /// The map shape
        map_shape: &'static Shape,
        /// Its key shape
        key_shape: &'static Shape,
    },

    /// The destination cannot perform an operation the decoder needs.
    NotImplemented {
        /// The destination shape
        shape: &'static Shape,
        /// What could not be done
        operation: &'static str,
    },

    /// Strict numeric mode refused a number.
    NumberOutOfRange {
        /// Description of the error
        message: String,
    },

    /// A destination handle disagreed with its own shape.
    Reflect(ReflectError),
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErrorKind::ShapeMismatch {
                expected,
                got,
                value,
            } => {
                let wanted = expected_kind(expected);
                if got.is_scalar() {
                    write!(
                        f,
                        "shape mismatch: {expected} wants {wanted}, got {got} `{value}`"
                    )
                } else {
                    write!(f, "shape mismatch: {expected} wants {wanted}, got {got}")
                }
            }
            DecodeErrorKind::UnsupportedDestination { path, shape } => {
                if path.is_empty() {
                    write!(f, "unsupported destination: no decode rule for {shape}")
                } else {
                    write!(
                        f,
                        "unsupported destination: no decode rule for {shape} at {path}"
                    )
                }
            }
            DecodeErrorKind::InvalidMapKeyType {
                map_shape,
                key_shape,
            } => write!(
                f,
                "invalid map key type: {map_shape} has {key_shape} keys, only String is supported"
            ),
            DecodeErrorKind::NotImplemented { shape, operation } => {
                write!(f, "not implemented: {shape} does not support {operation}")
            }
            DecodeErrorKind::NumberOutOfRange { message } => {
                write!(f, "number out of range: {message}")
            }
            DecodeErrorKind::Reflect(e) => write!(f, "reflection error: {e}"),
        }
    }
}

/// The value kind a destination of this shape accepts.
fn expected_kind(shape: &Shape) -> &'static str {
    match shape.def {
        Def::Scalar(ScalarType::Bool) => "a bool",
        Def::Scalar(ScalarType::String) => "a string",
        Def::Scalar(_) => "a number",
        Def::Struct(_) | Def::Map(_) => "an object",
        Def::List(_) | Def::Array(_) => "an array",
        Def::Option(od) => expected_kind(od.t),
        Def::Pointer(pd) => expected_kind(pd.pointee),
        Def::Undefined => "nothing",
    }
}
