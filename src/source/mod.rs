//! Log input: loading, level filtering and ordering.

use crate::layout::raw_text;
use crate::model::error::InputError;
use crate::model::LogEntry;
use std::path::Path;

pub mod file;

pub use file::{parse_lines, FileSource};

/// Ordering requested with `--sort`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Top-level field compared between entries.
    pub field: String,
    /// Largest value first.
    pub descending: bool,
}

impl SortKey {
    /// Parse `field` or `-field` (descending). Returns `None` for an empty key.
    pub fn parse(arg: &str) -> Option<Self> {
        let (field, descending) = match arg.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (arg, false),
        };
        if field.is_empty() {
            return None;
        }
        Some(Self {
            field: field.to_string(),
            descending,
        })
    }
}

/// Keep only entries whose level equals `level`, ignoring case.
pub fn filter_by_level(entries: Vec<LogEntry>, level: &str) -> Vec<LogEntry> {
    entries
        .into_iter()
        .filter(|entry| entry.level().eq_ignore_ascii_case(level))
        .collect()
}

/// Stable sort by the stringified field. Entries missing the field sort as "".
pub fn sort_entries(entries: &mut [LogEntry], key: &SortKey) {
    entries.sort_by(|a, b| {
        let ordering = raw_text(a.field(&key.field)).cmp(&raw_text(b.field(&key.field)));
        if key.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// Load `path` and apply the optional level filter and sort.
///
/// # Errors
///
/// Returns `InputError` if the file is missing or unreadable.
pub fn load(path: &Path, level: Option<&str>, sort: Option<&str>) -> Result<Vec<LogEntry>, InputError> {
    let mut entries = FileSource::new(path)?.into_entries();

    if let Some(level) = level {
        entries = filter_by_level(entries, level);
    }
    if let Some(key) = sort.and_then(SortKey::parse) {
        sort_entries(&mut entries, &key);
    }

    Ok(entries)
}
