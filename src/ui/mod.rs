//! UI rendering for the grandparent portal
//!
//! Single screen, top to bottom:
//! - Header with the title and the applied viewer
//! - Viewer email field
//! - Error banner (only while there is an error)
//! - Kid list and timeline, side by side or stacked on narrow terminals
//! - Keybind hints

mod footer;
mod header;
mod helpers;
mod layout;
mod roster;
mod timeline;
mod theme;

pub use footer::keybind_hints;
pub use header::TITLE;
pub use helpers::{moment_icon, spinner_frame, truncate_string, SPINNER_FRAMES};
pub use layout::{breakpoints, LayoutContext};
pub use roster::{EMPTY_ROSTER_TEXT, PRIVATE_TOGGLE_TEXT};
pub use theme::{COLOR_ERROR, COLOR_WARNING};
pub use timeline::{NO_MOMENTS_TEXT, PRIVATE_HIDDEN_TEXT};

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::app::App;

// ============================================================================
// Main UI Rendering
// ============================================================================

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let error = app.state.error();

    let [header_area, viewer_area, error_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(if error.is_some() { 1 } else { 0 }),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    header::render_header(frame, header_area, app);
    header::render_viewer_field(frame, viewer_area, app);
    if let Some(message) = error {
        header::render_error_banner(frame, error_area, message);
    }

    let (roster_area, timeline_area) = ctx.split_body(body_area);
    roster::render_roster(frame, roster_area, app);
    timeline::render_timeline(frame, timeline_area, app);

    footer::render_footer(frame, footer_area, app);
}
