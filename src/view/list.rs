//! Entry list pane and status bar.

use super::markup::to_line;
use super::styles::{LEVEL_KEY, MESSAGE_KEY, SELECTED_ROW, STATUS_BAR, TIMESTAMP_KEY};
use crate::layout::Row;
use crate::model::LogEntry;
use crate::state::EntryList;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};
use serde_json::Value;

/// Fallback key for the message column.
const SHORT_MESSAGE_KEY: &str = "msg";

/// Project an entry onto the list columns.
///
/// The message comes from `message`, falling back to `msg`.
pub fn entry_row(entry: &LogEntry) -> Row {
    let message = entry
        .field(MESSAGE_KEY)
        .or_else(|| entry.field(SHORT_MESSAGE_KEY))
        .cloned()
        .unwrap_or(Value::Null);

    let mut row = Row::new();
    row.insert(TIMESTAMP_KEY.to_string(), Value::String(entry.timestamp().to_string()));
    row.insert(LEVEL_KEY.to_string(), Value::String(entry.level().to_string()));
    row.insert(MESSAGE_KEY.to_string(), message);
    row
}

/// Rows for every entry, see [`entry_row`].
pub fn entry_rows(entries: &[LogEntry]) -> Vec<Row> {
    entries.iter().map(entry_row).collect()
}

/// Draw the visible window of pre-formatted table lines.
pub fn render_entry_list(frame: &mut Frame, area: Rect, table_lines: &[String], list: &EntryList) {
    let start = list.scroll_offset().min(table_lines.len());
    let end = (start + usize::from(area.height)).min(table_lines.len());

    let lines: Vec<Line<'static>> = table_lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let line = to_line(text);
            if start + i == list.selected_index() {
                line.patch_style(SELECTED_ROW)
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the one-line status bar.
pub fn render_status_bar(frame: &mut Frame, area: Rect, source_name: &str, list: &EntryList) {
    let position = if list.is_empty() {
        "0/0".to_string()
    } else {
        format!("{}/{}", list.selected_index() + 1, list.len())
    };
    let text = format!(
        "{{bold}} {source_name} {{/bold}} {position}  j/k: move  Enter: details  q: quit"
    );
    frame.render_widget(Paragraph::new(to_line(&text)).style(STATUS_BAR), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_prefers_message_field() {
        let entry = LogEntry::from_data(json!({
            "timestamp": "t", "level": "info", "message": "long", "msg": "short"
        }));
        let row = entry_row(&entry);
        assert_eq!(row.get(MESSAGE_KEY), Some(&json!("long")));
        assert_eq!(row.get(TIMESTAMP_KEY), Some(&json!("t")));
        assert_eq!(row.get(LEVEL_KEY), Some(&json!("info")));
    }

    #[test]
    fn row_falls_back_to_msg() {
        let entry = LogEntry::from_data(json!({"msg": "short"}));
        assert_eq!(entry_row(&entry).get(MESSAGE_KEY), Some(&json!("short")));
    }

    #[test]
    fn row_without_message_is_null() {
        let entry = LogEntry::from_data(json!({"level": "warn"}));
        let row = entry_row(&entry);
        assert_eq!(row.get(MESSAGE_KEY), Some(&Value::Null));
        assert_eq!(row.get(TIMESTAMP_KEY), Some(&json!("")));
    }
}
