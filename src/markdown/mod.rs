//! Rendering of assessment results for the terminal.
//!
//! - [`render_table`] turns the backend's loose pipe-delimited comparison
//!   table into escaped header and body cells.
//! - [`boxed_lines`] lays a [`RenderedTable`] out with box-drawing borders.
//! - [`render_narrative`] renders the narrative conclusion to styled lines.

mod boxed;
mod escape;
mod narrative;
pub mod styles;
mod table;

pub use boxed::{boxed_lines, BoxedLine, BoxedLineKind};
pub use escape::{escape_html, unescape_html};
pub use narrative::render_narrative;
pub use table::{render_table, RenderedTable};
