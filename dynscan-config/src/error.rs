use core::fmt;
use std::io;
use std::path::PathBuf;

use dynscan_core::Shape;
use dynscan_value::{DecodeError, JsonError, ValueType};

/// Errors returned by [`Config`](crate::Config).
#[derive(Debug)]
pub enum ConfigError {
    /// The document could not be read.
    Io {
        /// The file that was being read
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// The document is not valid JSON.
    Json(JsonError),

    /// The document parsed, but its top level is not an object.
    NotAnObject {
        /// What the top level was instead
        got: ValueType,
    },

    /// No entry under this key.
    KeyNotFound {
        /// The key that was looked up
        key: String,
    },

    /// The entry exists but has the wrong kind of value.
    WrongType {
        /// The key that was looked up
        key: String,
        /// What the caller asked for
        expected: ValueType,
        /// What the entry holds
        got: ValueType,
    },

    /// The entry could not be decoded into the destination.
    Decode {
        /// The key that was scanned
        key: String,
        /// The underlying error
        source: DecodeError,
    },
}

impl ConfigError {
    /// The destination shape, for decode errors.
    pub fn target_shape(&self) -> Option<&'static Shape> {
        match self {
            ConfigError::Decode { source, .. } => source.target_shape,
            _ => None,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "could not read {}: {source}", path.display())
            }
            ConfigError::Json(e) => write!(f, "{e}"),
            ConfigError::NotAnObject { got } => {
                write!(f, "config document must be an object, got {got}")
            }
            ConfigError::KeyNotFound { key } => write!(f, "key not found: {key}"),
            ConfigError::WrongType { key, expected, got } => {
                write!(f, "key {key} holds {got}, not {expected}")
            }
            ConfigError::Decode { key, source } => write!(f, "cannot scan key {key}: {source}"),
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Json(e) => Some(e),
            ConfigError::Decode { source, .. } => Some(source),
            ConfigError::NotAnObject { .. }
            | ConfigError::KeyNotFound { .. }
            | ConfigError::WrongType { .. } => None,
        }
    }
}

impl From<JsonError> for ConfigError {
    fn from(err: JsonError) -> Self {
        ConfigError::Json(err)
    }
}
