//! Result panel: whatever the current [`SubmissionView`] says.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::components::{render_spinner, status_badge};
use super::components::status_indicator::LOADING_LABEL;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};
use crate::markdown::styles::{STYLE_TABLE_BORDER, STYLE_TABLE_HEADER};
use crate::markdown::{boxed_lines, render_narrative, BoxedLineKind, RenderedTable};
use crate::submission::{SubmissionView, EMPTY_NARRATIVE_PLACEHOLDER, EMPTY_TABLE_PLACEHOLDER};

const IDLE_HINT: &str = "Enter a standard name and press Enter to start the assessment.";

fn section_heading(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))
}

fn placeholder(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
    ))
}

/// Table lines, or the placeholder for an empty table.
pub fn table_lines(table: &RenderedTable) -> Vec<Line<'static>> {
    if table.is_empty() {
        return vec![placeholder(EMPTY_TABLE_PLACEHOLDER)];
    }
    boxed_lines(table)
        .into_iter()
        .map(|line| {
            let style = match line.kind {
                BoxedLineKind::Border => STYLE_TABLE_BORDER,
                BoxedLineKind::Header => STYLE_TABLE_HEADER,
                BoxedLineKind::Body => Style::default(),
            };
            Line::from(Span::styled(line.text, style))
        })
        .collect()
}

/// Break a styled line at spaces so no piece is wider than `width` columns.
/// A word longer than `width` is split mid-word.
pub fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 || line.width() <= width {
        return vec![line];
    }

    let cells: Vec<(char, Style)> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
        .collect();

    let mut pieces = Vec::new();
    let mut start = 0;
    while start < cells.len() {
        let mut end = start;
        let mut used = 0;
        while end < cells.len() {
            let w = cells[end].0.width().unwrap_or(0);
            if used + w > width && end > start {
                break;
            }
            used += w;
            end += 1;
        }

        let (stop, next) = if end == cells.len() {
            (end, end)
        } else if cells[end].0 == ' ' {
            (end, end + 1)
        } else {
            match cells[start..end].iter().rposition(|(c, _)| *c == ' ') {
                Some(offset) if offset > 0 => (start + offset, start + offset + 1),
                _ => (end, end),
            }
        };

        let mut piece = Line::from(regroup(&cells[start..stop])).style(line.style);
        piece.alignment = line.alignment;
        pieces.push(piece);
        start = next;
    }
    pieces
}

fn regroup(cells: &[(char, Style)]) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut text = String::new();
    let mut current: Option<Style> = None;
    for &(c, style) in cells {
        if current.is_some_and(|s| s != style) {
            spans.push(Span::styled(std::mem::take(&mut text), current.unwrap_or_default()));
        }
        current = Some(style);
        text.push(c);
    }
    if let Some(style) = current {
        spans.push(Span::styled(text, style));
    }
    spans
}

/// Lines for the panel body. Narrative lines are wrapped to `width`; table
/// lines never are.
pub fn result_lines(view: &SubmissionView, tick_count: u64, width: usize) -> Vec<Line<'static>> {
    match view {
        SubmissionView::Idle => vec![placeholder(IDLE_HINT)],
        SubmissionView::Loading => vec![render_spinner(LOADING_LABEL, tick_count)],
        SubmissionView::Success { table, narrative } => {
            let mut lines = vec![section_heading("Detailed analysis")];
            lines.extend(table_lines(table));
            lines.push(Line::from(""));
            lines.push(section_heading("Conclusion"));
            if narrative.trim().is_empty() {
                lines.push(placeholder(EMPTY_NARRATIVE_PLACEHOLDER));
            } else {
                lines.extend(
                    render_narrative(narrative)
                        .into_iter()
                        .flat_map(|line| wrap_line(line, width)),
                );
            }
            lines
        }
        SubmissionView::Error(message) => vec![Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(message.clone(), Style::default().fg(COLOR_ERROR)),
        ])],
    }
}

/// Render the panel with the status badge in its title.
pub fn render_result_panel(
    frame: &mut Frame,
    area: Rect,
    view: &SubmissionView,
    tick_count: u64,
    scroll: u16,
) {
    let mut title = vec![Span::styled(" Result ", Style::default().fg(COLOR_HEADER))];
    if let Some(badge) = status_badge(view) {
        title.push(badge);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Line::from(title));

    // Wrapping would break the box-drawn table, so a success view arrives
    // with its narrative already wrapped and the paragraph itself does not wrap.
    let width = area.width.saturating_sub(2) as usize;
    let paragraph = Paragraph::new(result_lines(view, tick_count, width))
        .block(block)
        .scroll((scroll, 0));
    let paragraph = match view {
        SubmissionView::Success { .. } => paragraph,
        _ => paragraph.wrap(Wrap { trim: false }),
    };

    frame.render_widget(paragraph, area);
}
