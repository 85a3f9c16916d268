//! Color theme constants for the assessment UI
//!
//! Minimal dark palette, shared by all widgets.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::Cyan;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for the input box
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Status Colors
// ============================================================================

/// Request in flight
pub const COLOR_LOADING: Color = Color::Yellow;

/// Success badge and healthy backend
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Failure badge and unreachable backend
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Character Counter
// ============================================================================

/// Counter above the warning threshold
pub const COLOR_COUNTER_WARNING: Color = Color::Yellow;

/// Counter over the limit
pub const COLOR_COUNTER_OVER: Color = Color::Red;
