//! UI rendering for the assessment screen
//!
//! One screen, top to bottom:
//! - Header with the backend address and health
//! - Title input with the live character counter
//! - Submit hint (changes while a request is in flight)
//! - Result panel
//! - Status bar with keybinds and the result timestamp

pub mod components;
pub mod result_panel;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::input::Command;
use crate::traits::HttpClient;
use components::status_indicator::LOADING_LABEL;
use components::{calculate_input_field_height, render_input_field, InputFieldConfig};
use result_panel::render_result_panel;
use theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_LOADING, COLOR_SUCCESS};

/// Submit label when idle
pub const SUBMIT_LABEL: &str = "Start assessment";

const INPUT_LABEL: &str = "Standard name";
const INPUT_PLACEHOLDER: &str = "e.g. GB/T 1.1-2020 Directives for standardization";

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen.
pub fn render<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>) {
    let counter = app.counter();
    let input_config = InputFieldConfig::new(INPUT_LABEL, &app.input)
        .focused(true)
        .counter(counter)
        .placeholder(INPUT_PLACEHOLDER);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(calculate_input_field_height(&input_config)),
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_input_field(frame, chunks[1], &input_config);
    render_submit_hint(frame, chunks[2], app);
    render_result_panel(
        frame,
        chunks[3],
        app.view(),
        app.tick_count,
        app.result_scroll,
    );
    render_status_bar(frame, chunks[4], app);
}

fn render_header<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let (health_text, health_color) = match app.backend_healthy {
        None => ("checking", COLOR_DIM),
        Some(true) => ("reachable", COLOR_SUCCESS),
        Some(false) => ("unreachable", COLOR_ERROR),
    };

    let line = Line::from(vec![
        Span::styled(
            " Standard Assessment ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", app.backend_url()), Style::default().fg(COLOR_DIM)),
        Span::styled(format!("({})", health_text), Style::default().fg(health_color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_submit_hint<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let line = if app.controller.can_submit() {
        Line::from(vec![
            Span::styled("  [Enter] ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                SUBMIT_LABEL,
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            format!("  {}", LOADING_LABEL),
            Style::default().fg(COLOR_LOADING),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_bar<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let keybinds = [
        ("Enter", Command::Submit),
        ("Esc", Command::Reset),
        ("PgUp/PgDn", Command::ScrollResultDown),
        ("Ctrl+C", Command::Quit),
    ];

    let mut spans = Vec::new();
    for (key, command) in keybinds {
        spans.push(Span::styled(format!(" {} ", key), Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(
            format!("{}  ", command.description()),
            Style::default().fg(COLOR_DIM),
        ));
    }
    if let Some(completed_at) = app.completed_at {
        spans.push(Span::styled(
            format!("· {}", completed_at.format("%Y-%m-%d %H:%M:%S")),
            Style::default().fg(COLOR_DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
