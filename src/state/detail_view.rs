//! Detail overlay state machine.
//!
//! Holds one entry at a time and tracks scroll offset, display mode and the
//! `gg` chord. Pure state: the view layer draws [`DetailView::lines`] and
//! feeds viewport size and key actions back in.

use super::clock::{Clock, SystemClock};
use crate::format::{format_json, format_value};
use crate::markup::wrap;
use crate::model::{KeyAction, LogEntry, LogValue};
use std::time::{Duration, Instant};
use tracing::debug;

/// Window in which a second `g` completes the jump-to-top chord.
pub const GG_WINDOW: Duration = Duration::from_millis(1000);

/// How the entry payload is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Key-aligned, styled rendering.
    #[default]
    Formatted,
    /// Pretty-printed JSON.
    RawJson,
}

impl DisplayMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Formatted => DisplayMode::RawJson,
            DisplayMode::RawJson => DisplayMode::Formatted,
        }
    }
}

/// Result of feeding an action to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    /// The overlay was closed.
    Closed,
    /// State changed; redraw.
    Redraw,
    /// Nothing visible changed.
    Unchanged,
}

/// State of the detail overlay.
///
/// The display mode survives `close`/`display` cycles.
#[derive(Debug)]
pub struct DetailView<C: Clock = SystemClock> {
    entry: Option<LogEntry>,
    title: String,
    mode: DisplayMode,
    lines: Vec<String>,
    scroll_offset: usize,
    viewport_height: usize,
    viewport_width: usize,
    pending_g_at: Option<Instant>,
    clock: C,
}

impl DetailView<SystemClock> {
    /// Closed overlay driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DetailView<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DetailView<C> {
    /// Closed overlay driven by `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            entry: None,
            title: String::new(),
            mode: DisplayMode::default(),
            lines: Vec::new(),
            scroll_offset: 0,
            viewport_height: 0,
            viewport_width: 0,
            pending_g_at: None,
            clock,
        }
    }

    // ===== Accessors =====

    /// True while an entry is displayed.
    pub fn is_open(&self) -> bool {
        self.entry.is_some()
    }

    /// The displayed entry, if any.
    pub fn entry(&self) -> Option<&LogEntry> {
        self.entry.as_ref()
    }

    /// Overlay title as marked-up text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Rendered lines for the current entry and mode, wrapped to the
    /// viewport width. One element per screen row.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Rendered content joined into one block.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Index of the first visible line.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Visible content rows.
    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Visible content columns. Zero means lines are not wrapped.
    pub fn viewport_width(&self) -> usize {
        self.viewport_width
    }

    /// True while a first `g` is waiting for its partner.
    pub fn is_chord_pending(&self) -> bool {
        self.pending_g_at
            .is_some_and(|at| self.clock.now().duration_since(at) < GG_WINDOW)
    }

    // ===== Transitions =====

    /// Open the overlay on `entry`.
    pub fn display(&mut self, entry: &LogEntry) {
        self.title = format!("{{bold}} {} - {} {{/}}", entry.timestamp(), entry.level());
        self.entry = Some(entry.clone());
        self.scroll_offset = 0;
        self.pending_g_at = None;
        self.render();
        debug!(mode = ?self.mode, lines = self.lines.len(), "Detail view opened");
    }

    /// Detach the overlay. Safe in any state.
    pub fn close(&mut self) {
        if self.entry.take().is_some() {
            debug!("Detail view closed");
        }
        self.lines.clear();
        self.scroll_offset = 0;
        self.pending_g_at = None;
    }

    /// Update the number of visible content rows (after layout or resize).
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }

    /// Update the number of visible content columns and rewrap.
    pub fn set_viewport_width(&mut self, width: usize) {
        if width != self.viewport_width {
            self.viewport_width = width;
            self.render();
        }
    }

    /// Apply a key action. A closed overlay ignores everything.
    pub fn handle_action(&mut self, action: KeyAction) -> DetailOutcome {
        if !self.is_open() {
            return DetailOutcome::Unchanged;
        }

        let page = self.viewport_height;
        match action {
            KeyAction::Quit | KeyAction::Select | KeyAction::Close => {
                self.close();
                return DetailOutcome::Closed;
            }
            KeyAction::ScrollDown => self.scroll_by(1),
            KeyAction::ScrollUp => self.scroll_by(-1),
            KeyAction::HalfPageDown => self.scroll_by(signed(page / 2)),
            KeyAction::HalfPageUp => self.scroll_by(-signed(page / 2)),
            KeyAction::PageDown => self.scroll_by(signed(page)),
            KeyAction::PageUp => self.scroll_by(-signed(page)),
            KeyAction::GotoTopChord => return self.goto_top_chord(),
            KeyAction::GotoBottom => {
                self.scroll_offset = self.lines.len().saturating_sub(page);
            }
            KeyAction::ToggleMode => {
                self.mode = self.mode.toggled();
                self.render();
            }
        }
        DetailOutcome::Redraw
    }

    fn goto_top_chord(&mut self) -> DetailOutcome {
        let now = self.clock.now();
        match self.pending_g_at.take() {
            Some(armed_at) if now.duration_since(armed_at) < GG_WINDOW => {
                self.scroll_offset = 0;
                DetailOutcome::Redraw
            }
            _ => {
                self.pending_g_at = Some(now);
                DetailOutcome::Unchanged
            }
        }
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_height)
    }

    fn scroll_by(&mut self, delta: isize) {
        let target = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_offset = target.min(self.max_offset());
    }

    /// Recompute `lines` for the current entry and mode.
    fn render(&mut self) {
        let Some(entry) = &self.entry else {
            self.lines.clear();
            return;
        };
        let content: Vec<String> = match self.mode {
            DisplayMode::Formatted => format_value(&LogValue::from(entry.data())),
            DisplayMode::RawJson => format_json(entry.data())
                .split('\n')
                .map(str::to_string)
                .collect(),
        };
        let width = self.viewport_width;
        self.lines = content.iter().flat_map(|line| wrap(line, width)).collect();
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }
}

fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

#[cfg(test)]
#[path = "detail_view_tests.rs"]
mod tests;
