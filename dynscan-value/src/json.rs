//! Parsing JSON text into [`Value`] trees, through `serde_json`.

use core::fmt;

use crate::{Object, Value};

/// The input was not valid JSON.
#[derive(Debug)]
pub struct JsonError {
    inner: serde_json::Error,
}

impl JsonError {
    /// One-based line of the offending input.
    pub fn line(&self) -> usize {
        self.inner.line()
    }

    /// One-based column of the offending input.
    pub fn column(&self) -> usize {
        self.inner.column()
    }
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid JSON: {}", self.inner)
    }
}

impl core::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.inner)
    }
}

impl From<serde_json::Error> for JsonError {
    fn from(inner: serde_json::Error) -> Self {
        Self { inner }
    }
}

impl Value {
    /// Parses a JSON document.
    ///
    /// Duplicate object keys keep the last value.
    pub fn from_json_str(s: &str) -> Result<Value, JsonError> {
        Ok(serde_json::from_str::<serde_json::Value>(s)?.into())
    }

    /// Parses a JSON document from UTF-8 bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Value, JsonError> {
        Ok(serde_json::from_slice::<serde_json::Value>(bytes)?.into())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // Every JSON number has an f64 approximation.
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}
