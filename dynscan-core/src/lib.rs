#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod types;
pub use types::*;

mod poke;
pub use poke::*;

mod error;
pub use error::*;

mod scan;
pub use scan::*;

// `Scan` implementations for standard library types
mod impls;
