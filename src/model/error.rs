//! Error types for jlv.
//!
//! Errors are grouped by where they arise and compose via `From` so the `?`
//! operator carries them up to `main`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned from the application shell
//!   - [`InputError`] - the log file cannot be opened or read
//!   - [`ConfigError`](crate::config::ConfigError) - the config file exists but is unusable
//!   - [`LoggingError`](crate::logging::LoggingError) - the tracing subscriber could not start
//!   - `std::io::Error` - terminal setup or drawing failed
//! - [`ParseError`] - one JSONL line is malformed (non-fatal, the line is skipped)
//! - [`FormatError`] - a column formatter rejected a value (non-fatal, the raw
//!   value is shown instead)
//!
//! # Recovery Strategy
//!
//! Only `AppError` is fatal. Parse and format errors are logged and recovered
//! locally so one bad line or cell never takes down the view.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The log file could not be read.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// The config file exists but could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The tracing subscriber could not be initialised.
    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Failures in the crossterm/ratatui layer (raw mode, alternate screen,
    /// draw calls). Without a working terminal the viewer cannot continue.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading the log file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The log file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use jlv::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.log"),
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.log"));
    /// ```
    #[error("Log file does not exist: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Any other I/O failure while opening or reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single malformed JSONL line.
///
/// Non-fatal: the loader logs it with its 1-based line number and moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line is not valid JSON.
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// 1-based line number in the file.
        line: usize,
        /// Message from `serde_json`.
        message: String,
    },

    /// The line is valid JSON but not an object.
    #[error("Expected a JSON object at line {line}")]
    NotAnObject {
        /// 1-based line number in the file.
        line: usize,
    },
}

/// A column formatter could not render a raw value.
///
/// Always recovered by the row formatter, which shows the raw value instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The value did not have the shape the formatter expects.
    ///
    /// # Examples
    ///
    /// ```
    /// use jlv::model::error::FormatError;
    ///
    /// let err = FormatError::Unparsable {
    ///     value: "yesterday".to_string(),
    ///     reason: "input contains invalid characters".to_string(),
    /// };
    /// assert!(err.to_string().contains("yesterday"));
    /// ```
    #[error("Cannot format {value:?}: {reason}")]
    Unparsable {
        /// The raw value, stringified.
        value: String,
        /// Why the formatter rejected it.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn input_error_converts_into_app_error() {
        fn open() -> Result<(), AppError> {
            Err(InputError::FileNotFound {
                path: PathBuf::from("app.log"),
            })?;
            Ok(())
        }

        let err = open().unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::FileNotFound { .. })));
        assert!(err.to_string().contains("app.log"));
    }

    #[test]
    fn io_error_converts_into_input_error() {
        let err: InputError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, InputError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn io_error_converts_into_terminal_error() {
        let err: AppError = io::Error::other("broken pipe").into();
        assert!(matches!(err, AppError::Terminal(_)));
    }

    #[test]
    fn parse_error_reports_line_number() {
        let err = ParseError::InvalidJson {
            line: 42,
            message: "EOF while parsing".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid JSON at line 42: EOF while parsing");

        let err = ParseError::NotAnObject { line: 7 };
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn format_error_quotes_value() {
        let err = FormatError::Unparsable {
            value: "abc".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot format \"abc\": bad");
    }
}
