//! Key and command handling for the App.

use crossterm::event::KeyEvent;
use tracing::debug;

use super::App;
use crate::input::Command;
use crate::submission::SubmitRejected;
use crate::traits::HttpClient;

/// Lines scrolled per PageUp/PageDown.
const SCROLL_STEP: u16 = 5;

impl<C: HttpClient + 'static> App<C> {
    /// Resolve a key press through the keybindings and execute it.
    pub fn handle_key(&mut self, key: &KeyEvent) {
        if let Some(command) = self.keybindings.lookup(key) {
            self.execute(command);
        }
    }

    /// Carry out a command.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => self.quit(),
            Command::Submit => self.submit(),
            Command::Reset => self.reset(),
            Command::InsertChar(c) => self.input.push(c),
            Command::Paste(text) => {
                let flattened: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.input.push_str(&flattened);
            }
            Command::Backspace => {
                self.input.pop();
            }
            Command::DeleteToLineStart => self.input.clear(),
            Command::ScrollResultUp => {
                self.result_scroll = self.result_scroll.saturating_sub(SCROLL_STEP);
            }
            Command::ScrollResultDown => {
                self.result_scroll = self.result_scroll.saturating_add(SCROLL_STEP);
            }
        }
        self.mark_dirty();
    }

    fn submit(&mut self) {
        match self.controller.on_submit(&self.input) {
            Ok(ticket) => {
                debug!("submitted {}", ticket);
                self.completed_at = None;
                self.result_scroll = 0;
            }
            Err(SubmitRejected::InFlight) => {}
            Err(SubmitRejected::Invalid(_)) => {
                self.completed_at = None;
                self.result_scroll = 0;
            }
        }
    }

    /// Clear the title and hide the result. An in-flight request is left to
    /// finish and then ignored.
    fn reset(&mut self) {
        self.input.clear();
        self.controller.on_reset();
        self.completed_at = None;
        self.result_scroll = 0;
    }
}
