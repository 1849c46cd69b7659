//! Column formatters and fixed styles for the entry list.
//!
//! Formatters emit marked-up text; `view::markup` turns it into terminal
//! attributes at draw time.

use crate::config::ResolvedConfig;
use crate::layout::{raw_text, Column};
use crate::model::FormatError;
use chrono::{DateTime, Local};
use ratatui::style::{Color, Modifier, Style};
use serde_json::Value;
use std::collections::BTreeMap;

/// Key of the timestamp column.
pub const TIMESTAMP_KEY: &str = "timestamp";
/// Key of the level column.
pub const LEVEL_KEY: &str = "level";
/// Key of the message column.
pub const MESSAGE_KEY: &str = "message";

/// Local time format for the timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Highlight for the selected row.
pub const SELECTED_ROW: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Border of the detail overlay.
pub const DETAIL_BORDER: Style = Style::new().fg(Color::Cyan);

/// Status bar background.
pub const STATUS_BAR: Style = Style::new().bg(Color::DarkGray).fg(Color::White);

/// Render an RFC 3339 timestamp in local time.
///
/// # Errors
///
/// Returns `FormatError::Unparsable` for anything that is not RFC 3339; the
/// row formatter then shows the raw value.
pub fn format_timestamp(value: &Value) -> Result<String, FormatError> {
    let text = raw_text(Some(value));
    DateTime::parse_from_rfc3339(&text)
        .map(|ts| ts.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string())
        .map_err(|e| FormatError::Unparsable {
            value: text.into_owned(),
            reason: e.to_string(),
        })
}

/// Wrap a level in its configured colour. Unknown levels pass through plain.
pub fn format_level(colors: &BTreeMap<String, String>, value: &Value) -> String {
    let level = raw_text(Some(value));
    match colors.get(&level.to_lowercase()) {
        Some(color) => format!("{{{color}-fg}}{level}{{/{color}-fg}}"),
        None => level.into_owned(),
    }
}

/// Columns of the entry list: timestamp, coloured level, then the message
/// absorbing the remaining width.
pub fn default_columns(config: &ResolvedConfig) -> Vec<Column> {
    let colors = config.level_colors.clone();
    vec![
        Column::new(TIMESTAMP_KEY).with_format(format_timestamp),
        Column::new(LEVEL_KEY).with_format(move |value| Ok(format_level(&colors, value))),
        Column::new(MESSAGE_KEY),
    ]
}
