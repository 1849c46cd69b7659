//! UI state machines (pure).
//!
//! All state transitions are plain methods testable without a terminal.

pub mod clock;
pub mod detail_view;
pub mod entry_list;

// Re-export for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use detail_view::{DetailOutcome, DetailView, DisplayMode, GG_WINDOW};
pub use entry_list::EntryList;
