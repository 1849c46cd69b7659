//! Domain model types (pure).

pub mod error;
pub mod key_action;
pub mod log_entry;
pub mod log_value;

pub use error::{AppError, FormatError, InputError, ParseError};
pub use key_action::KeyAction;
pub use log_entry::LogEntry;
pub use log_value::{LogValue, Scalar};
