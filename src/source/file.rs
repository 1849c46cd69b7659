//! Read-once JSONL file loading.

use crate::model::error::{InputError, ParseError};
use crate::model::LogEntry;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A fully loaded log file.
///
/// Malformed lines are kept as `ParseError`s so callers can report them;
/// they never stop the load.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    entries: Vec<LogEntry>,
    skipped: Vec<ParseError>,
}

impl FileSource {
    /// Load every line of `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist and
    /// `InputError::Io` for other read failures.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        let (entries, skipped) = parse_lines(BufReader::new(file))?;

        for error in &skipped {
            warn!(path = %path.display(), "{}", error);
        }
        info!(
            path = %path.display(),
            entries = entries.len(),
            skipped = skipped.len(),
            "Log file loaded"
        );

        Ok(Self {
            path: path.to_path_buf(),
            entries,
            skipped,
        })
    }

    /// Path the entries were read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries parsed successfully, in file order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// One error per line that failed to parse.
    pub fn skipped(&self) -> &[ParseError] {
        &self.skipped
    }

    /// Take the parsed entries.
    pub fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }
}

/// Parse JSONL from `reader`. Blank lines are ignored; line numbers are 1-based.
///
/// # Errors
///
/// Returns `InputError::Io` if reading fails. Malformed lines are returned in
/// the second vector, not as errors.
pub fn parse_lines<R: BufRead>(reader: R) -> Result<(Vec<LogEntry>, Vec<ParseError>), InputError> {
    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match LogEntry::parse(&line, idx + 1) {
            Ok(entry) => entries.push(entry),
            Err(error) => skipped.push(error),
        }
    }

    Ok((entries, skipped))
}
