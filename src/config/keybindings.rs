//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Lookups ignore key event kind and
/// state, so repeat events resolve like presses.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, normalize_modifiers(key)))
            .copied()
    }

    /// Bind `key` to `action`, replacing any existing binding.
    pub fn insert(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings
            .insert(KeyEvent::new(key.code, normalize_modifiers(key)), action);
    }

    /// True for key releases, which terminals with enhanced keyboard
    /// reporting send in addition to presses.
    pub fn is_release(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Release
    }
}

/// Uppercase letters arrive with SHIFT on some terminals and without it on
/// others; the character already carries the case.
fn normalize_modifiers(key: KeyEvent) -> KeyModifiers {
    match key.code {
        KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);

        // Close / select
        bindings.insert(plain(KeyCode::Char('q')), KeyAction::Quit);
        bindings.insert(plain(KeyCode::Enter), KeyAction::Select);
        bindings.insert(plain(KeyCode::Esc), KeyAction::Close);

        // Vim-style and arrow scrolling
        bindings.insert(plain(KeyCode::Char('j')), KeyAction::ScrollDown);
        bindings.insert(plain(KeyCode::Down), KeyAction::ScrollDown);
        bindings.insert(plain(KeyCode::Char('k')), KeyAction::ScrollUp);
        bindings.insert(plain(KeyCode::Up), KeyAction::ScrollUp);

        // Page navigation
        bindings.insert(ctrl('d'), KeyAction::HalfPageDown);
        bindings.insert(ctrl('u'), KeyAction::HalfPageUp);
        bindings.insert(ctrl('f'), KeyAction::PageDown);
        bindings.insert(plain(KeyCode::PageDown), KeyAction::PageDown);
        bindings.insert(ctrl('b'), KeyAction::PageUp);
        bindings.insert(plain(KeyCode::PageUp), KeyAction::PageUp);

        // Jumps
        bindings.insert(plain(KeyCode::Char('g')), KeyAction::GotoTopChord);
        bindings.insert(plain(KeyCode::Char('G')), KeyAction::GotoBottom);

        // Display mode
        bindings.insert(plain(KeyCode::Tab), KeyAction::ToggleMode);

        bindings
    }
}
