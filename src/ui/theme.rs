//! Color theme constants for the portal UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused panel
pub const COLOR_BORDER_FOCUSED: Color = Color::White;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Selected kid - bright green
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for the viewer field
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Status Colors
// ============================================================================

/// Error banner
pub const COLOR_ERROR: Color = Color::Red;

/// Private moments withheld notice - amber
pub const COLOR_WARNING: Color = Color::Rgb(255, 191, 0);

/// Loading spinner - gray
pub const COLOR_LOADING: Color = Color::Rgb(128, 128, 128);

// ============================================================================
// Visibility Badges
// ============================================================================

pub const COLOR_PUBLIC: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_PRIVATE: Color = Color::Rgb(198, 120, 221); // purple #C678DD
