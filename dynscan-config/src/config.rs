//! The store itself.

use std::fs;
use std::path::Path;

use dynscan_core::Scan;
use dynscan_value::{Decoder, Object, Value, ValueType};
use tracing::debug;

use crate::ConfigError;

/// Where [`Config::load_default`] reads from.
pub const DEFAULT_PATH: &str = "./config.json";

/// A parsed configuration document.
///
/// Entries keep the order they had in the document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    entries: Object,
}

impl Config {
    /// Wraps an already parsed document. Its top level must be an object.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(ConfigError::NotAnObject { got: other.kind() }),
        }
    }

    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Self::from_value(Value::from_json_str(json)?)
    }

    /// Reads and parses the JSON document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_value(Value::from_json_slice(&bytes)?)?;
        debug!(path = %path.display(), keys = config.len(), "loaded config");
        Ok(config)
    }

    /// Reads [`DEFAULT_PATH`].
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(DEFAULT_PATH)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level keys, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The raw value under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let value = self.entries.get(key);
        if value.is_none() {
            debug!(key, "config key not found");
        }
        value
    }

    /// The raw value under `key`, or [`ConfigError::KeyNotFound`].
    pub fn get_must(&self, key: &str) -> Result<&Value, ConfigError> {
        self.get(key).ok_or_else(|| ConfigError::KeyNotFound { key: key.into() })
    }

    /// The string under `key`. `None` if absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// The string under `key`, or an error saying why there is none.
    pub fn get_str_must(&self, key: &str) -> Result<&str, ConfigError> {
        let value = self.get_must(key)?;
        value.as_str().ok_or_else(|| ConfigError::WrongType {
            key: key.into(),
            expected: ValueType::String,
            got: value.kind(),
        })
    }

    /// The string under `key`, or `default` when it is absent, not a string, or empty.
    pub fn get_str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get_str(key) {
            Some(s) if !s.is_empty() => s,
            _ => default,
        }
    }

    /// The number under `key`, truncated toward zero and saturated to `i64`.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get_f64(key).map(|n| n as i64)
    }

    /// Like [`get_i64`](Self::get_i64), with a default.
    pub fn get_i64_or(&self, key: &str, default: i64) -> i64 {
        self.get_i64(key).unwrap_or(default)
    }

    /// Like [`get_i64`](Self::get_i64) but for `isize`, with a default.
    pub fn get_int_or(&self, key: &str, default: isize) -> isize {
        self.get_f64(key).map_or(default, |n| n as isize)
    }

    /// The number under `key`.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_number()
    }

    /// Like [`get_f64`](Self::get_f64), with a default.
    pub fn get_f64_or(&self, key: &str, default: f64) -> f64 {
        self.get_f64(key).unwrap_or(default)
    }

    /// The boolean under `key`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// Decodes the entry under `key` into `destination`.
    ///
    /// Fields of `destination` that the entry does not mention keep their
    /// values, so defaults can be set before scanning.
    pub fn scan<T: Scan>(&self, key: &str, destination: &mut T) -> Result<(), ConfigError> {
        self.scan_with(&Decoder::new(), key, destination)
    }

    /// Like [`scan`](Self::scan), with a configured decoder.
    pub fn scan_with<T: Scan>(
        &self,
        decoder: &Decoder,
        key: &str,
        destination: &mut T,
    ) -> Result<(), ConfigError> {
        let value = self.get_must(key)?;
        decoder
            .decode(value, destination)
            .map_err(|source| ConfigError::Decode {
                key: key.into(),
                source,
            })
    }
}

impl TryFrom<Value> for Config {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
