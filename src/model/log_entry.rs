//! Log entry parsed from one JSONL line.

use crate::model::error::ParseError;
use serde_json::Value;

// ===== LogEntry =====

/// A parsed log entry.
///
/// `timestamp` and `level` are lifted out of the object for the list view and
/// overlay title; `data` keeps the whole object for the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    timestamp: String,
    level: String,
    data: Value,
}

impl LogEntry {
    /// An entry with explicit header fields and payload.
    pub fn new(timestamp: impl Into<String>, level: impl Into<String>, data: Value) -> Self {
        Self {
            timestamp: timestamp.into(),
            level: level.into(),
            data,
        }
    }

    /// Build an entry from a parsed JSON object.
    ///
    /// Missing `timestamp`/`level` become empty strings; non-string values are
    /// kept in their JSON form.
    pub fn from_data(data: Value) -> Self {
        let text = |key: &str| match data.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        let timestamp = text("timestamp");
        let level = text("level");
        Self::new(timestamp, level, data)
    }

    /// Parse one JSONL line.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidJson` for malformed JSON and
    /// `ParseError::NotAnObject` for valid JSON that is not an object.
    pub fn parse(line: &str, line_number: usize) -> Result<Self, ParseError> {
        let data: Value = serde_json::from_str(line).map_err(|e| ParseError::InvalidJson {
            line: line_number,
            message: e.to_string(),
        })?;
        if !data.is_object() {
            return Err(ParseError::NotAnObject { line: line_number });
        }
        Ok(Self::from_data(data))
    }

    // ===== Accessors (read-only) =====

    /// The `timestamp` field as text.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The `level` field as text.
    pub fn level(&self) -> &str {
        &self.level
    }

    /// The whole parsed object.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Top-level field of the payload.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

// ===== Tests =====
