//! Loose markdown table parsing.
//!
//! The backend's comparison table is "markdown-ish": usually pipe-delimited,
//! sometimes with prose lines mixed in, sometimes without outer pipes. This
//! parser is deliberately forgiving and never fails.

use serde::Serialize;

use super::escape::escape_html;

/// Column delimiter.
const DELIMITER: char = '|';

/// A parsed table. Every cell is trimmed and HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RenderedTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RenderedTable {
    /// True when there is nothing to show; callers display a placeholder.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }

    /// Widest row (header included).
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    /// Render as an HTML table. Cells are already escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table class=\"evaluation-table\">");
        html.push_str("<thead><tr>");
        for cell in &self.header {
            html.push_str("<th>");
            html.push_str(cell);
            html.push_str("</th>");
        }
        html.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str("<td>");
                html.push_str(cell);
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        html
    }
}

/// Parse `markdown` into a header and body rows.
///
/// 1. Blank lines are dropped; nothing left means an empty table.
/// 2. Lines without a `|` are ignored.
/// 3. The first remaining line is the header.
/// 4. Later lines become rows only when they split into more than one
///    non-empty cell.
///
/// # Example
///
/// ```
/// use stdassess::markdown::render_table;
///
/// let table = render_table("A|B\n1|2\n3|4");
/// assert_eq!(table.header, vec!["A", "B"]);
/// assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
/// ```
pub fn render_table(markdown: &str) -> RenderedTable {
    let mut table = RenderedTable::default();
    let mut seen_header = false;

    for line in markdown
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| line.contains(DELIMITER))
    {
        let cells = split_cells(line);
        if !seen_header {
            table.header = cells;
            seen_header = true;
        } else if cells.len() > 1 {
            table.rows.push(cells);
        }
    }

    table
}

/// Split on `|`, trim, drop empties, escape.
fn split_cells(line: &str) -> Vec<String> {
    line.split(DELIMITER)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(escape_html)
        .collect()
}
