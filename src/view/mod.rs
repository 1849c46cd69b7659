//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod detail;
mod list;
pub mod markup;
pub mod styles;

pub use detail::{
    detail_popup_area, detail_viewport_height, detail_viewport_width, render_detail_overlay,
};
pub use list::{entry_row, entry_rows, render_entry_list, render_status_bar};
pub use markup::{tag_style, to_line, to_lines};
pub use styles::default_columns;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::layout::{format_rows, Column, Row};
use crate::model::{KeyAction, LogEntry};
use crate::state::{Clock, DetailView, EntryList, SystemClock};
use constants::{EVENT_POLL_MS, FALLBACK_WIDTH, STATUS_BAR_HEIGHT};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// clock driving the `gg` chord.
pub struct TuiApp<B, C = SystemClock>
where
    B: Backend,
    C: Clock,
{
    terminal: Terminal<B>,
    list: EntryList,
    rows: Vec<Row>,
    columns: Vec<Column>,
    spacing: usize,
    /// Rows rendered against the current terminal width
    table_lines: Vec<String>,
    detail: DetailView<C>,
    key_bindings: KeyBindings,
    source_name: String,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen. If any step
    /// after raw mode fails, the terminal is restored before returning.
    pub fn new(
        entries: Vec<LogEntry>,
        config: &ResolvedConfig,
        source_name: impl Into<String>,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        setup_or_restore(
            || {
                let mut stdout = io::stdout();
                stdout.execute(EnterAlternateScreen)?;
                let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
                Self::with_terminal(terminal, DetailView::new(), entries, config, source_name)
            },
            restore_terminal,
        )
    }
}

impl<B: Backend, C: Clock> TuiApp<B, C> {
    /// Build the application on an already initialised terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        detail: DetailView<C>,
        entries: Vec<LogEntry>,
        config: &ResolvedConfig,
        source_name: impl Into<String>,
    ) -> Result<Self, TuiError> {
        let rows = entry_rows(&entries);
        let mut app = Self {
            terminal,
            list: EntryList::new(entries),
            rows,
            columns: default_columns(config),
            spacing: config.spacing,
            table_lines: Vec::new(),
            detail,
            key_bindings: KeyBindings::default(),
            source_name: source_name.into(),
        };
        let size = app.terminal.size()?;
        app.relayout(size.width, size.height);
        Ok(app)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        let poll_interval = Duration::from_millis(EVENT_POLL_MS);

        self.draw()?;

        loop {
            if !event::poll(poll_interval)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    self.handle_resize(width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }

    /// Handle a key event. Returns true when the application should quit.
    ///
    /// While the detail overlay is open it receives every bound key, so `q`
    /// closes the overlay rather than quitting.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        if KeyBindings::is_release(&key) {
            return false;
        }
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if self.detail.is_open() {
            self.detail.handle_action(action);
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Select => {
                if let Some(entry) = self.list.selected() {
                    self.detail.display(entry);
                }
            }
            other => {
                self.list.handle_action(other);
            }
        }
        false
    }

    /// Handle a terminal resize event
    ///
    /// Recomputes column widths for every row at the new width.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        self.relayout(width, height);
    }

    fn relayout(&mut self, width: u16, height: u16) {
        let width = if width > 0 { width } else { FALLBACK_WIDTH };
        self.table_lines = format_rows(&self.rows, &self.columns, self.spacing, usize::from(width));
        self.list
            .set_viewport_height(usize::from(height.saturating_sub(STATUS_BAR_HEIGHT)));
        let area = Rect::new(0, 0, width, height);
        self.detail.set_viewport_height(detail_viewport_height(area));
        self.detail.set_viewport_width(detail_viewport_width(area));
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let table_lines = &self.table_lines;
        let list = &self.list;
        let detail = &self.detail;
        let source_name = self.source_name.as_str();
        self.terminal
            .draw(|frame| render_layout(frame, table_lines, list, detail, source_name))?;
        Ok(())
    }

    // ===== Accessors (read-only) =====

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Selection state of the entry list.
    pub fn list(&self) -> &EntryList {
        &self.list
    }

    /// The detail overlay state.
    pub fn detail(&self) -> &DetailView<C> {
        &self.detail
    }

    /// Rows rendered against the current terminal width.
    pub fn table_lines(&self) -> &[String] {
        &self.table_lines
    }
}

/// Entry list on top, status bar at the bottom, overlay over both.
fn render_layout<C: Clock>(
    frame: &mut Frame,
    table_lines: &[String],
    list: &EntryList,
    detail: &DetailView<C>,
    source_name: &str,
) {
    let [list_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
            .areas(frame.area());

    render_entry_list(frame, list_area, table_lines, list);
    render_status_bar(frame, status_area, source_name, list);
    render_detail_overlay(frame, detail);
}

/// Run the viewer on `entries` until the user quits.
///
/// The terminal is restored even if the event loop fails.
pub fn run_app(
    entries: Vec<LogEntry>,
    config: &ResolvedConfig,
    source_name: &str,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(entries, config, source_name)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Run a terminal setup step, calling `restore` if it fails.
///
/// The setup error is returned; a failure to restore is only logged.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T, TuiError>,
    restore: impl FnOnce() -> Result<(), TuiError>,
) -> Result<T, TuiError> {
    match setup() {
        Ok(value) => Ok(value),
        Err(err) => {
            if let Err(restore_err) = restore() {
                warn!(error = %restore_err, "Failed to restore terminal after setup error");
            }
            Err(err)
        }
    }
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
