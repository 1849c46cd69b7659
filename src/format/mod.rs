//! Rendering of structured log payloads for the detail view.

pub mod object;

pub use object::{format_json, format_object, format_value, KEY_STYLE_CLOSE, KEY_STYLE_OPEN};
