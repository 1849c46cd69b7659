//! Tabular row layout under a fixed width budget.
//!
//! [`max_lengths`] allocates one width per column (the last column absorbs
//! whatever budget is left) and [`format_rows`] renders every row against
//! those shared widths so the whole table stays aligned.

pub mod columns;
pub mod rows;

pub use columns::{max_lengths, raw_text, Column, ColumnWidths, FormatFn, Row};
pub use rows::{format_cell, format_rows};
