//! Style constants for rendered assessment text

use ratatui::style::{Color, Modifier, Style};

/// Style for code blocks - gray/dim color
pub const STYLE_CODE_BLOCK: Style = Style::new().fg(Color::DarkGray);

/// Style for inline code - cyan color
pub const STYLE_INLINE_CODE: Style = Style::new().fg(Color::Cyan);

/// Style for headings - cyan and bold
pub const STYLE_HEADING: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Table borders
pub const STYLE_TABLE_BORDER: Style = Style::new().fg(Color::DarkGray);

/// Table header row
pub const STYLE_TABLE_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
