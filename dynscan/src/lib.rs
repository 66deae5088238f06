#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub use dynscan_core::*;

pub use dynscan_macros::*;
