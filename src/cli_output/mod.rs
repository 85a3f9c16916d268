//! Plain stdout output for the one-shot CLI modes.

mod boxes;

pub use boxes::*;
