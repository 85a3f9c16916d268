//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects: the
//! keybinding table maps keys to commands, [`App::execute`](crate::app::App::execute)
//! carries them out.

/// Represents all user actions the TUI understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C)
    Quit,
    /// Submit the title for assessment (Enter, Ctrl+Enter)
    Submit,
    /// Clear input and result (Esc)
    Reset,

    // =========================================================================
    // Input/Editing Commands
    // =========================================================================
    /// Append a character to the title
    InsertChar(char),
    /// Append pasted text; newlines become spaces
    Paste(String),
    /// Delete the last character (Backspace)
    Backspace,
    /// Clear the title (Ctrl+U)
    DeleteToLineStart,

    // =========================================================================
    // Result Panel
    // =========================================================================
    /// Scroll the result panel up (PageUp)
    ScrollResultUp,
    /// Scroll the result panel down (PageDown)
    ScrollResultDown,
}

impl Command {
    /// Whether this command edits the title.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::Paste(_)
                | Command::Backspace
                | Command::DeleteToLineStart
        )
    }

    /// Short description for the help bar.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::Submit => "assess",
            Command::Reset => "reset",
            Command::InsertChar(_) | Command::Paste(_) => "type",
            Command::Backspace => "delete",
            Command::DeleteToLineStart => "clear",
            Command::ScrollResultUp | Command::ScrollResultDown => "scroll",
        }
    }
}
