//! Domain-level keyboard actions independent of key bindings.

/// Actions the viewer understands.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// One line down. Default: j/↓
    ScrollDown,
    /// One line up. Default: k/↑
    ScrollUp,
    /// Half a viewport down. Default: Ctrl+d
    HalfPageDown,
    /// Half a viewport up. Default: Ctrl+u
    HalfPageUp,
    /// One viewport down. Default: Ctrl+f/Page Down
    PageDown,
    /// One viewport up. Default: Ctrl+b/Page Up
    PageUp,
    /// First half of the `gg` chord; the second press within the window
    /// jumps to the top. Default: g
    GotoTopChord,
    /// Jump so the last line is visible. Default: G
    GotoBottom,

    // Detail view
    /// Switch between formatted and raw JSON rendering. Default: Tab
    ToggleMode,
    /// Open the selected entry, or close the detail view. Default: Enter
    Select,
    /// Close the detail view. Default: Esc
    Close,

    // Application
    /// Close the detail view, or exit from the list. Default: q
    Quit,
}
