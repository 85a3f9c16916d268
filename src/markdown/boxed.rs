//! Box-drawing layout for a [`RenderedTable`].
//!
//! Produces plain strings tagged with their role so the TUI can style them
//! and the CLI can print them as-is. Cells are decoded back from HTML
//! entities here since a terminal never interprets markup.

use unicode_width::UnicodeWidthStr;

use super::escape::unescape_html;
use super::table::RenderedTable;

/// Narrowest column, for readability.
const MIN_COLUMN_WIDTH: usize = 3;

/// What a laid-out line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxedLineKind {
    Border,
    Header,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxedLine {
    pub kind: BoxedLineKind,
    pub text: String,
}

impl BoxedLine {
    fn new(kind: BoxedLineKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// Lay out `table` with box-drawing borders. Empty tables give no lines.
pub fn boxed_lines(table: &RenderedTable) -> Vec<BoxedLine> {
    let num_cols = table.column_count();
    if num_cols == 0 {
        return Vec::new();
    }

    let header: Vec<String> = table.header.iter().map(|c| unescape_html(c)).collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|c| unescape_html(c)).collect())
        .collect();

    let mut col_widths = vec![MIN_COLUMN_WIDTH; num_cols];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (i, cell) in row.iter().enumerate() {
            col_widths[i] = col_widths[i].max(cell.width());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(BoxedLine::new(
        BoxedLineKind::Border,
        build_border(&col_widths, '┌', '┬', '┐'),
    ));
    lines.push(BoxedLine::new(
        BoxedLineKind::Header,
        build_row(&header, &col_widths),
    ));
    if !rows.is_empty() {
        lines.push(BoxedLine::new(
            BoxedLineKind::Border,
            build_border(&col_widths, '├', '┼', '┤'),
        ));
    }
    for row in &rows {
        lines.push(BoxedLine::new(BoxedLineKind::Body, build_row(row, &col_widths)));
    }
    lines.push(BoxedLine::new(
        BoxedLineKind::Border,
        build_border(&col_widths, '└', '┴', '┘'),
    ));
    lines
}

fn build_border(col_widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut border = String::new();
    border.push(left);
    for (i, width) in col_widths.iter().enumerate() {
        border.push_str(&"─".repeat(width + 2));
        if i + 1 < col_widths.len() {
            border.push(mid);
        }
    }
    border.push(right);
    border
}

/// Missing trailing cells are padded blank.
fn build_row(cells: &[String], col_widths: &[usize]) -> String {
    let mut line = String::from("│");
    for (i, width) in col_widths.iter().enumerate() {
        let content = cells.get(i).map(String::as_str).unwrap_or("");
        // `format!` pads by char count, which is wrong for wide glyphs.
        let padding = width.saturating_sub(content.width());
        line.push(' ');
        line.push_str(content);
        line.push_str(&" ".repeat(padding + 1));
        line.push('│');
    }
    line
}
