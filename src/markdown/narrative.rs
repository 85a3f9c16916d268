//! Narrative conclusion rendering.
//!
//! The conclusion is mostly prose, sometimes with headings, lists, emphasis
//! or code. It is rendered to styled ratatui lines; nothing is ever
//! interpreted as markup beyond what pulldown-cmark recognizes, and raw HTML
//! is shown as literal text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::styles::{STYLE_CODE_BLOCK, STYLE_HEADING, STYLE_INLINE_CODE};

/// Render the narrative `text` to styled lines.
///
/// Paragraphs are separated by a blank line, list items get a bullet, and
/// code blocks keep their line structure. Empty input gives a single empty
/// line.
pub fn render_narrative(text: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current_spans: Vec<Span<'static>> = Vec::new();

    let mut style_stack: Vec<Style> = vec![Style::default()];

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::CodeBlock(_) => {
                    flush(&mut lines, &mut current_spans);
                    style_stack.push(STYLE_CODE_BLOCK);
                }
                Tag::Heading { .. } => {
                    separate_block(&mut lines);
                    style_stack.push(STYLE_HEADING);
                }
                Tag::Strong => {
                    let current = current_style(&style_stack);
                    style_stack.push(current.add_modifier(Modifier::BOLD));
                }
                Tag::Emphasis => {
                    let current = current_style(&style_stack);
                    style_stack.push(current.add_modifier(Modifier::ITALIC));
                }
                Tag::Strikethrough => {
                    let current = current_style(&style_stack);
                    style_stack.push(current.add_modifier(Modifier::CROSSED_OUT));
                }
                Tag::Paragraph => {
                    // Loose list items open a paragraph after the bullet.
                    if current_spans.is_empty() {
                        separate_block(&mut lines);
                    }
                }
                Tag::Item => {
                    flush(&mut lines, &mut current_spans);
                    current_spans.push(Span::styled("• ".to_string(), current_style(&style_stack)));
                }
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::CodeBlock => {
                    flush(&mut lines, &mut current_spans);
                    style_stack.pop();
                }
                TagEnd::Heading(_) => {
                    flush(&mut lines, &mut current_spans);
                    style_stack.pop();
                }
                TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough => {
                    style_stack.pop();
                }
                TagEnd::Paragraph | TagEnd::Item => {
                    flush(&mut lines, &mut current_spans);
                }
                _ => {}
            },
            Event::Text(content) | Event::Html(content) | Event::InlineHtml(content) => {
                let style = current_style(&style_stack);
                let mut first = true;
                for part in content.split('\n') {
                    if !first {
                        lines.push(Line::from(std::mem::take(&mut current_spans)));
                    }
                    first = false;
                    if !part.is_empty() {
                        current_spans.push(Span::styled(part.to_string(), style));
                    }
                }
            }
            Event::Code(code) => {
                current_spans.push(Span::styled(code.to_string(), STYLE_INLINE_CODE));
            }
            Event::SoftBreak | Event::HardBreak => {
                lines.push(Line::from(std::mem::take(&mut current_spans)));
            }
            _ => {}
        }
    }

    flush(&mut lines, &mut current_spans);

    if lines.is_empty() {
        lines.push(Line::from(""));
    }

    lines
}

fn current_style(style_stack: &[Style]) -> Style {
    style_stack.last().copied().unwrap_or_default()
}

fn flush(lines: &mut Vec<Line<'static>>, spans: &mut Vec<Span<'static>>) {
    if !spans.is_empty() {
        lines.push(Line::from(std::mem::take(spans)));
    }
}

/// Blank line between blocks, never at the top.
fn separate_block(lines: &mut Vec<Line<'static>>) {
    if lines.last().is_some_and(|line| line.width() > 0) {
        lines.push(Line::from(""));
    }
}
