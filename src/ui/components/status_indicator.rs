//! Status Indicator Component
//!
//! Spinner while a request is in flight, and the success/failure badge shown
//! in the result panel title.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::submission::SubmissionView;
use crate::ui::theme::{COLOR_ERROR, COLOR_LOADING, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame at the 16ms loop tick.
const TICKS_PER_FRAME: u64 = 6;

/// Badge text for a successful assessment
pub const BADGE_SUCCESS: &str = "Assessment succeeded";

/// Badge text for a failed assessment
pub const BADGE_FAILED: &str = "Assessment failed";

/// Label shown while the request is in flight
pub const LOADING_LABEL: &str = "Assessing...";

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Spinner frame for a tick count
pub fn spinner_frame(tick_count: u64) -> usize {
    ((tick_count / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize
}

/// Spinner line with a message
pub fn render_spinner(message: &str, tick_count: u64) -> Line<'static> {
    let style = Style::default().fg(COLOR_LOADING);
    Line::from(vec![
        Span::styled(
            format!("{} ", get_spinner_char(spinner_frame(tick_count))),
            style,
        ),
        Span::styled(message.to_string(), style.add_modifier(Modifier::BOLD)),
    ])
}

/// Badge for a terminal view; `None` while idle or loading
pub fn status_badge(view: &SubmissionView) -> Option<Span<'static>> {
    match view {
        SubmissionView::Success { .. } => Some(Span::styled(
            format!(" \u{25CF} {} ", BADGE_SUCCESS),
            Style::default()
                .fg(COLOR_SUCCESS)
                .add_modifier(Modifier::BOLD),
        )),
        SubmissionView::Error(_) => Some(Span::styled(
            format!(" \u{2717} {} ", BADGE_FAILED),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        )),
        SubmissionView::Idle | SubmissionView::Loading => None,
    }
}
