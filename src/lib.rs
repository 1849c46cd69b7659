//! JSON log viewer (jlv)
//!
//! TUI application for browsing JSON-lines log files.
//!
//! The layout engine (`markup`, `layout`, `format`) and the UI state
//! machines (`state`) are pure; `view` is the terminal shell around them.

pub mod config;
pub mod format;
pub mod layout;
pub mod logging;
pub mod markup;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
