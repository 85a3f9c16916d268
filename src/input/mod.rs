//! Keyboard input: commands and the bindings that trigger them.

mod command;
mod keybindings;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig};
