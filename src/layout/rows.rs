//! Row rendering against shared column widths.

use super::columns::{max_lengths, raw_text, Column, Row};
use crate::markup::{pad_end, spaces};
use crate::model::FormatError;
use serde_json::Value;
use tracing::trace;

/// Format a single cell and fit it to `width`.
///
/// Formatted output is measured without its tokens; raw values are known to
/// be plain and are measured as-is.
///
/// # Errors
///
/// Returns the formatter's error untouched. [`format_rows`] recovers from it.
pub fn format_cell(column: &Column, raw: &Value, width: usize) -> Result<String, FormatError> {
    match &column.format {
        Some(format) => {
            let value = format(raw)?;
            Ok(pad_end(&value, width, false))
        }
        None => Ok(pad_end(&raw_text(Some(raw)), width, true)),
    }
}

/// Render `rows` as aligned table lines, one per row in input order.
///
/// Widths are computed once for the whole set. A cell whose formatter fails
/// falls back to its raw, unpadded text; the rest of the row is unaffected.
pub fn format_rows(rows: &[Row], columns: &[Column], spacing: usize, max_width: usize) -> Vec<String> {
    let widths = max_lengths(columns, rows, spacing, max_width);
    let separator = spaces(spacing);

    rows.iter()
        .map(|row| {
            columns
                .iter()
                .zip(widths.iter())
                .map(|(column, width)| {
                    let raw = row.get(&column.key).unwrap_or(&Value::Null);
                    format_cell(column, raw, width).unwrap_or_else(|err| {
                        trace!(column = %column.key, error = %err, "Cell formatter failed, using raw value");
                        raw_text(Some(raw)).into_owned()
                    })
                })
                .collect::<Vec<_>>()
                .join(&separator)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    fn failing(value: &Value) -> Result<String, FormatError> {
        Err(FormatError::Unparsable {
            value: value.to_string(),
            reason: "always fails".to_string(),
        })
    }

    #[test]
    fn plain_cells_are_joined_with_spacing() {
        let columns = [Column::new("a"), Column::new("b")];
        let lines = format_rows(&[row(json!({"a": "x", "b": "y"}))], &columns, 1, 10);

        // a = 1, b = 10 - (1 + 2)
        assert_eq!(lines, vec!["x y      ".to_string()]);
    }

    #[test]
    fn alignment_is_shared_across_rows() {
        let columns = [Column::new("a"), Column::new("b")];
        let rows = [
            row(json!({"a": "short", "b": "1"})),
            row(json!({"a": "much longer", "b": "2"})),
        ];

        let lines = format_rows(&rows, &columns, 1, 20);

        assert_eq!(lines[0], "short       1      ");
        assert_eq!(lines[1], "much longer 2      ");
    }

    #[test]
    fn formatter_output_is_padded_by_visible_width() {
        let columns = [
            Column::new("level").with_format(|v| Ok(format!("{{red-fg}}{}{{/red-fg}}", raw_text(Some(v))))),
            Column::new("msg"),
        ];
        let rows = [row(json!({"level": "error", "msg": "boom"})), row(json!({"level": "warning", "msg": "hm"}))];

        let lines = format_rows(&rows, &columns, 1, 15);

        assert_eq!(lines[0], "{red-fg}error{/red-fg}   boom  ");
        assert_eq!(lines[1], "{red-fg}warning{/red-fg} hm    ");
    }

    #[test]
    fn failing_formatter_falls_back_to_raw_value() {
        let columns = [Column::new("a").with_format(failing)];
        let rows = [row(json!({"a": 1})), row(json!({"a": 2}))];

        let lines = format_rows(&rows, &columns, 1, 10);

        assert_eq!(lines, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn failing_cell_does_not_affect_neighbours() {
        let columns = [Column::new("a").with_format(failing), Column::new("b")];
        let rows = [row(json!({"a": "raw", "b": "ok"}))];

        let lines = format_rows(&rows, &columns, 1, 10);

        // a width = 3, b = 10 - (3 + 2) = 5
        assert_eq!(lines, vec!["raw ok   ".to_string()]);
    }

    #[test]
    fn absent_fields_render_as_blank() {
        let columns = [Column::new("a").with_length(3), Column::new("b")];
        let lines = format_rows(&[row(json!({"b": "x"}))], &columns, 1, 8);

        // a = 3, b = 8 - (3 + 2) = 3
        assert_eq!(lines, vec!["    x  ".to_string()]);
    }

    #[test]
    fn overflowing_cells_are_truncated() {
        let columns = [Column::new("a").with_length(3), Column::new("b")];
        let lines = format_rows(&[row(json!({"a": "abcdef", "b": "0123456789"}))], &columns, 1, 10);

        // b = 10 - (3 + 2) = 5
        assert_eq!(lines, vec!["abc 01234".to_string()]);
    }

    #[test]
    fn format_cell_reports_formatter_error() {
        let column = Column::new("a").with_format(failing);
        assert!(format_cell(&column, &json!(1), 4).is_err());
    }

    #[test]
    fn no_rows_no_lines() {
        assert!(format_rows(&[], &[Column::new("a")], 1, 10).is_empty());
    }
}
