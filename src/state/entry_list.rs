//! Selection state for the entry list.

use crate::model::{KeyAction, LogEntry};

/// Entries shown in the main list plus the selected row.
///
/// Invariant: `selected < entries.len()` whenever the list is non-empty, and
/// the selected row lies inside `[scroll_offset, scroll_offset + viewport)`.
#[derive(Debug, Clone, Default)]
pub struct EntryList {
    entries: Vec<LogEntry>,
    selected: usize,
    scroll_offset: usize,
    viewport_height: usize,
}

impl EntryList {
    /// A list with the first entry selected.
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// All entries, in display order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the selected entry.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected entry, if any.
    pub fn selected(&self) -> Option<&LogEntry> {
        self.entries.get(self.selected)
    }

    /// First visible row.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Set the visible row count and keep the selection on screen.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.adjust_scroll();
    }

    /// Move the selection. Returns true if the action was a list motion.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        let last = self.entries.len().saturating_sub(1);
        let page = self.viewport_height.max(1);
        self.selected = match action {
            KeyAction::ScrollDown => (self.selected + 1).min(last),
            KeyAction::ScrollUp => self.selected.saturating_sub(1),
            KeyAction::HalfPageDown => (self.selected + page / 2).min(last),
            KeyAction::HalfPageUp => self.selected.saturating_sub(page / 2),
            KeyAction::PageDown => (self.selected + page).min(last),
            KeyAction::PageUp => self.selected.saturating_sub(page),
            KeyAction::GotoTopChord => 0,
            KeyAction::GotoBottom => last,
            _ => return false,
        };
        self.adjust_scroll();
        true
    }

    fn adjust_scroll(&mut self) {
        if self.viewport_height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + self.viewport_height {
            self.scroll_offset = self.selected + 1 - self.viewport_height;
        }
    }
}
