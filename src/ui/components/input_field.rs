//! Input Field Component
//!
//! The title input: label with the live `n/200` counter, a rounded input
//! box, and an optional inline error under it.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{
    COLOR_BORDER, COLOR_COUNTER_OVER, COLOR_COUNTER_WARNING, COLOR_DIM, COLOR_INPUT_BG,
};
use crate::validation::{CharCounter, CounterLevel};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Optional character counter shown right of the label
    pub counter: Option<CharCounter>,
    /// Optional error message to display below the input
    pub error: Option<&'a str>,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    /// Create a new input field configuration
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            counter: None,
            error: None,
            placeholder: None,
        }
    }

    /// Set whether the input is focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show a character counter
    pub fn counter(mut self, counter: CharCounter) -> Self {
        self.counter = Some(counter);
        self
    }

    /// Set an error message to display
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Set placeholder text
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Calculate the height needed for an input field
///
/// Returns the number of rows needed:
/// - 1 for label
/// - 3 for input box (border + content + border)
/// - 1 for error (if present)
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    let mut height = 4;
    if config.error.is_some() {
        height += 1;
    }
    height
}

/// Counter color for a level.
pub fn counter_style(level: CounterLevel) -> Style {
    match level {
        CounterLevel::Normal => Style::default().fg(COLOR_DIM),
        CounterLevel::Warning => Style::default().fg(COLOR_COUNTER_WARNING),
        CounterLevel::Over => Style::default().fg(COLOR_COUNTER_OVER),
    }
}

/// Render an input field with label, counter, input box, and optional error
///
/// # Returns
/// The height consumed by this input field
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let mut y_offset = 0;

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let label_area = Rect {
        x: area.x + 2,
        y: area.y + y_offset,
        width: area.width.saturating_sub(4),
        height: 1,
    }
    .intersection(area);
    let label = Paragraph::new(Line::from(Span::styled(config.label, label_style)));
    frame.render_widget(label, label_area);

    if let Some(counter) = &config.counter {
        let counter_text = Paragraph::new(Line::from(Span::styled(
            counter.label(),
            counter_style(counter.level),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(counter_text, label_area);
    }
    y_offset += 1;

    let input_area = Rect {
        x: area.x + 2,
        y: area.y + y_offset,
        width: area.width.saturating_sub(4),
        height: 3,
    }
    // Squeezed layouts clip rather than draw outside the frame.
    .intersection(area);

    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let (display_value, text_style) = match config.placeholder {
        Some(placeholder) if config.value.is_empty() => {
            (placeholder.to_string(), Style::default().fg(COLOR_DIM))
        }
        _ if config.focused => (config.value.to_string(), Style::default().fg(Color::White)),
        _ => (config.value.to_string(), Style::default().fg(COLOR_DIM)),
    };

    let mut spans = Vec::with_capacity(2);
    if config.focused && config.value.is_empty() {
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White)));
        spans.push(Span::styled(display_value, text_style));
    } else {
        let mut content = display_value;
        if config.focused {
            content.push('\u{2588}'); // Block cursor
        }
        spans.push(Span::styled(content, text_style));
    }

    // Keep the tail visible when the title is longer than the box.
    let inner_width = input_area.width.saturating_sub(2) as usize;
    let content_width: usize = spans.iter().map(|s| s.width()).sum();
    let scroll_x = horizontal_scroll(content_width, inner_width);

    let input_text = Paragraph::new(Line::from(spans))
        .block(block)
        .scroll((0, scroll_x));

    frame.render_widget(input_text, input_area);
    y_offset += 3;

    if let Some(error) = config.error {
        let error_area = Rect {
            x: area.x + 2,
            y: area.y + y_offset,
            width: area.width.saturating_sub(4),
            height: 1,
        }
        .intersection(area);

        let error_text = Paragraph::new(Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(Color::Red)), // X mark
            Span::styled(error, Style::default().fg(Color::Red)),
        ]));

        frame.render_widget(error_text, error_area);
        y_offset += 1;
    }

    y_offset
}

// ============================================================================
// Tests
// ============================================================================

/// Columns to scroll so the last `inner_width` columns stay visible.
fn horizontal_scroll(content_width: usize, inner_width: usize) -> u16 {
    u16::try_from(content_width.saturating_sub(inner_width)).unwrap_or(u16::MAX)
}
