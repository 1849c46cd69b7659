//! Column configuration and width allocation.

use crate::markup::len;
use crate::model::FormatError;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// One row of the table: column key → raw JSON scalar.
pub type Row = serde_json::Map<String, Value>;

/// Per-column cell formatter producing marked-up text.
pub type FormatFn = Arc<dyn Fn(&Value) -> Result<String, FormatError> + Send + Sync>;

/// A column of the row layout.
///
/// The last column in a list absorbs the remaining width; its `length` is
/// ignored.
#[derive(Clone)]
pub struct Column {
    /// Key into each [`Row`].
    pub key: String,
    /// Fixed width; `None` derives it from the widest value.
    pub length: Option<usize>,
    /// Optional formatter applied to the raw value before padding.
    pub format: Option<FormatFn>,
}

impl Column {
    /// A column reading `key` with a derived width and no formatter.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            length: None,
            format: None,
        }
    }

    /// Fix the width instead of deriving it.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Attach a formatter run on each raw value.
    pub fn with_format<F>(mut self, format: F) -> Self
    where
        F: Fn(&Value) -> Result<String, FormatError> + Send + Sync + 'static,
    {
        self.format = Some(Arc::new(format));
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("length", &self.length)
            .field("format", &self.format.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Computed widths, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    widths: Vec<(String, usize)>,
}

impl ColumnWidths {
    /// Width of the first column named `key`.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.widths
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, width)| *width)
    }

    /// Widths in column order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.widths.iter().map(|(_, width)| *width)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// True when no columns were measured.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Plain text of a raw cell value. Absent and `null` are empty.
pub fn raw_text(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

/// Allocate a width to every column.
///
/// Leading columns use their fixed length or the widest stringified value in
/// `rows`. The last column gets
/// `max_width - (sum of leading widths + spacing * columns.len())`, floored
/// at zero when the terminal is too narrow.
pub fn max_lengths(
    columns: &[Column],
    rows: &[Row],
    spacing: usize,
    max_width: usize,
) -> ColumnWidths {
    let Some((last, leading)) = columns.split_last() else {
        return ColumnWidths::default();
    };

    let mut widths: Vec<(String, usize)> = leading
        .iter()
        .map(|column| {
            let width = column.length.unwrap_or_else(|| {
                rows.iter()
                    .map(|row| len(&raw_text(row.get(&column.key)), false))
                    .max()
                    .unwrap_or(0)
            });
            (column.key.clone(), width)
        })
        .collect();

    let used: usize = widths.iter().map(|(_, width)| width).sum::<usize>() + spacing * columns.len();
    let remainder = max_width.checked_sub(used).unwrap_or_else(|| {
        debug!(
            column = %last.key,
            used,
            max_width,
            "Absorbing column has no room left, clamping to zero"
        );
        0
    });
    widths.push((last.key.clone(), remainder));

    ColumnWidths { widths }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn empty_column_list_has_no_widths() {
        let widths = max_lengths(&[], &[row(json!({"a": "x"}))], 1, 80);
        assert!(widths.is_empty());
    }

    #[test]
    fn last_column_absorbs_remainder() {
        let columns = [
            Column::new("a"),
            Column::new("b").with_length(5),
            Column::new("c"),
        ];
        let rows = [row(json!({"a": "abcd", "c": "ignored"})), row(json!({"a": "ab"}))];

        let widths = max_lengths(&columns, &rows, 1, 30);

        assert_eq!(widths.get("a"), Some(4));
        assert_eq!(widths.get("b"), Some(5));
        assert_eq!(widths.get("c"), Some(30 - (4 + 5 + 3)));
    }

    #[test]
    fn widths_are_tracked_per_column() {
        let columns = [Column::new("a"), Column::new("b"), Column::new("c")];
        let rows = [
            row(json!({"a": "long value", "b": "x"})),
            row(json!({"a": "y", "b": "wider"})),
        ];

        let widths = max_lengths(&columns, &rows, 2, 100);

        assert_eq!(widths.iter().collect::<Vec<_>>(), vec![10, 5, 100 - (15 + 6)]);
    }

    #[test]
    fn absent_and_null_values_measure_zero() {
        let columns = [Column::new("a"), Column::new("z")];
        let rows = [row(json!({"a": null})), row(json!({}))];

        assert_eq!(max_lengths(&columns, &rows, 0, 10).get("a"), Some(0));
    }

    #[test]
    fn numbers_are_measured_stringified() {
        let columns = [Column::new("n"), Column::new("z")];
        let rows = [row(json!({"n": 12345})), row(json!({"n": 1.5}))];

        assert_eq!(max_lengths(&columns, &rows, 1, 40).get("n"), Some(5));
    }

    #[test]
    fn markup_in_raw_values_is_not_measured() {
        let columns = [Column::new("a"), Column::new("z")];
        let rows = [row(json!({"a": "{red-fg}abc{/red-fg}"}))];

        assert_eq!(max_lengths(&columns, &rows, 1, 40).get("a"), Some(3));
    }

    #[test]
    fn negative_remainder_is_clamped_to_zero() {
        let columns = [Column::new("a").with_length(50), Column::new("b")];

        let widths = max_lengths(&columns, &[], 1, 20);

        assert_eq!(widths.get("a"), Some(50));
        assert_eq!(widths.get("b"), Some(0));
    }

    #[test]
    fn single_column_takes_budget_minus_spacing() {
        let widths = max_lengths(&[Column::new("only")], &[], 1, 10);
        assert_eq!(widths.get("only"), Some(9));
    }

    #[test]
    fn column_debug_hides_closure() {
        let column = Column::new("a").with_format(|v| Ok(v.to_string()));
        let debug = format!("{:?}", column);
        assert!(debug.contains("<fn>"));
    }
}
