//! Simple line-based CLI output utilities.

use std::io::{self, Write};

use crate::markdown::{boxed_lines, RenderedTable};

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Print the main header.
///
/// ```text
/// STANDARD ASSESSMENT
/// ════════════════════════════════════════════════════════════
/// ```
pub fn print_header(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "═".repeat(LINE_WIDTH));
    println!();
}

/// Print a section title.
///
/// ```text
/// DETAILED ANALYSIS
/// ────────────────────────────────────────────────────────────
/// ```
pub fn print_section(title: &str) {
    println!("{}", title);
    println!("{}", "─".repeat(LINE_WIDTH));
}

/// Print an indented status line.
///
/// ```text
///   ✓ Backend reachable (12 ms)
/// ```
pub fn print_step_line(icon: &str, message: &str) {
    println!("  {} {}", icon, message);
}

/// Print a spinner line (overwrites current line).
pub fn print_step_spinner(spinner_char: char, message: &str) {
    print!("\r  {} {}", spinner_char, message);
    io::stdout().flush().ok();
}

/// Clear the spinner line.
pub fn clear_step_spinner() {
    print!("\r{}\r", " ".repeat(LINE_WIDTH));
    io::stdout().flush().ok();
}

/// Box-drawn table lines, or `placeholder` when the table is empty.
pub fn table_text(table: &RenderedTable, placeholder: &str) -> Vec<String> {
    if table.is_empty() {
        return vec![placeholder.to_string()];
    }
    boxed_lines(table).into_iter().map(|line| line.text).collect()
}

/// Print a table with box-drawing borders.
pub fn print_table(table: &RenderedTable, placeholder: &str) {
    for line in table_text(table, placeholder) {
        println!("{}", line);
    }
}

/// Print a block of text, indented by two spaces.
pub fn print_block(text: &str) {
    for line in text.lines() {
        println!("  {}", line);
    }
}

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const WARNING: &str = "⚠";
}

/// Spinner characters for loading animation.
pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
