//! Structured payload values for the detail view.

use serde_json::{Number, Value};
use std::fmt;

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number, kept in its parsed form.
    Number(Number),
    /// JSON string, unquoted.
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

/// A payload value: either a leaf or a mapping of ordered keys to values.
///
/// Arrays are mappings keyed by element index.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    /// A leaf.
    Scalar(Scalar),
    /// Keys in source order with their values.
    Object(Vec<(String, LogValue)>),
}

impl From<&Value> for LogValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => LogValue::Scalar(Scalar::Null),
            Value::Bool(b) => LogValue::Scalar(Scalar::Bool(*b)),
            Value::Number(n) => LogValue::Scalar(Scalar::Number(n.clone())),
            Value::String(s) => LogValue::Scalar(Scalar::String(s.clone())),
            Value::Array(items) => LogValue::Object(
                items
                    .iter()
                    .enumerate()
                    .map(|(idx, item)| (idx.to_string(), LogValue::from(item)))
                    .collect(),
            ),
            Value::Object(map) => LogValue::Object(
                map.iter()
                    .map(|(key, item)| (key.clone(), LogValue::from(item)))
                    .collect(),
            ),
        }
    }
}
