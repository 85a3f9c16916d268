//! Default keybindings for the application.
//!
//! Maps key combinations to [`Command`]s. Printable characters without
//! Ctrl/Alt fall through to [`Command::InsertChar`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

impl From<&KeyEvent> for KeyCombo {
    fn from(key: &KeyEvent) -> Self {
        // Shift is folded into the character itself.
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    pub global: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        let mut global = HashMap::new();

        global.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);

        global.insert(KeyCombo::plain(KeyCode::Enter), Command::Submit);
        global.insert(KeyCombo::ctrl(KeyCode::Enter), Command::Submit);
        // Most terminals report Ctrl+Enter as Ctrl+J.
        global.insert(KeyCombo::ctrl(KeyCode::Char('j')), Command::Submit);

        global.insert(KeyCombo::plain(KeyCode::Esc), Command::Reset);

        global.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        global.insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::DeleteToLineStart);

        global.insert(KeyCombo::plain(KeyCode::PageUp), Command::ScrollResultUp);
        global.insert(KeyCombo::plain(KeyCode::PageDown), Command::ScrollResultDown);

        Self { global }
    }
}

impl KeybindingConfig {
    /// Resolve a key press to a command.
    pub fn lookup(&self, key: &KeyEvent) -> Option<Command> {
        if let Some(command) = self.global.get(&KeyCombo::from(key)) {
            return Some(command.clone());
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Command::InsertChar(c))
            }
            _ => None,
        }
    }
}
