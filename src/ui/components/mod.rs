//! Reusable UI components.

pub mod input_field;
pub mod status_indicator;

pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use status_indicator::{render_spinner, status_badge};
