//! Key-aligned, indented rendering of nested payloads.
//!
//! Alignment is local: the keys of one mapping are padded to the longest key
//! of that same mapping, and nested mappings compute their own padding.

use crate::markup::{display_width, pad_end, spaces};
use crate::model::{LogValue, Scalar};
use serde_json::Value;
use tracing::warn;

/// Style tokens opened before every key.
pub const KEY_STYLE_OPEN: &str = "{blue-fg}{bold}";
/// Style tokens closed after every key.
pub const KEY_STYLE_CLOSE: &str = "{/bold}{/blue-fg}";

const INDENT_WIDTH: usize = 2;

fn key_padding(entries: &[(String, LogValue)]) -> usize {
    entries
        .iter()
        .map(|(key, _)| display_width(key))
        .max()
        .unwrap_or(0)
}

/// Lines of a scalar's text. Always at least one, possibly empty.
fn scalar_lines(scalar: &Scalar) -> Vec<String> {
    let text = scalar.to_string();
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn styled_key(key: &str, padding: usize) -> String {
    let label = pad_end(&format!("{}:", key), padding + 1, true);
    format!("{}{}{}", KEY_STYLE_OPEN, label, KEY_STYLE_CLOSE)
}

/// Render the entries of one mapping at nesting depth `level`.
///
/// Multi-line values continue on following lines, indented to the column
/// where the value started.
pub fn format_object(entries: &[(String, LogValue)], level: usize) -> Vec<String> {
    let padding = key_padding(entries);
    let indent = spaces(level * INDENT_WIDTH);
    let mut lines = Vec::with_capacity(entries.len());

    for (key, value) in entries {
        let key = styled_key(key, padding);
        match value {
            LogValue::Scalar(scalar) => {
                let mut value_lines = scalar_lines(scalar).into_iter();
                let first = value_lines.next().unwrap_or_default();
                lines.push(format!("{}{} {}", indent, key, first));
                let continuation = spaces(indent.len() + padding + 2);
                lines.extend(value_lines.map(|line| format!("{}{}", continuation, line)));
            }
            LogValue::Object(children) => {
                lines.push(format!("{}{}", indent, key));
                lines.extend(format_object(children, level + 1));
            }
        }
    }

    lines
}

/// Render a whole payload. A scalar payload renders as its own lines.
pub fn format_value(value: &LogValue) -> Vec<String> {
    match value {
        LogValue::Scalar(scalar) => scalar_lines(scalar),
        LogValue::Object(entries) => format_object(entries, 0),
    }
}

/// Raw rendering: pretty-printed JSON with two-space indentation.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| {
        warn!(error = %err, "Pretty JSON failed, falling back to compact form");
        value.to_string()
    })
}
