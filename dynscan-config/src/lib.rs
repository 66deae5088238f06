#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

mod error;
pub use error::ConfigError;

mod config;
pub use config::{Config, DEFAULT_PATH};
