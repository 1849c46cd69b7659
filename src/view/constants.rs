//! Layout dimension constants for TUI rendering.

/// Height of the status bar in lines.
///
/// Single line at the bottom of the screen for position and key hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for the detail overlay.
pub const DETAIL_POPUP_WIDTH_PERCENT: u16 = 90;

/// Height percentage for the detail overlay.
pub const DETAIL_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width used when the terminal reports zero columns.
pub const FALLBACK_WIDTH: u16 = 80;

/// Poll interval of the event loop.
pub const EVENT_POLL_MS: u64 = 250;
