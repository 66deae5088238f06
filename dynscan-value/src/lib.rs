#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod macros;

mod value;
pub use value::*;

mod json;
pub use json::JsonError;

mod error;
pub use error::{DecodeError, DecodeErrorKind, PathSegment};

mod decode;
pub use decode::{Decoder, decode, decode_into, from_value};
