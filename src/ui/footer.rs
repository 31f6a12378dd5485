//! Keybind hints.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::{App, Focus};

use super::helpers::spinner_frame;
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_LOADING};

/// (key, action) pairs for the current focus. Narrow terminals get fewer.
pub fn keybind_hints(focus: Focus, narrow: bool) -> Vec<(&'static str, &'static str)> {
    match focus {
        Focus::Viewer => vec![("Enter", "apply"), ("Esc", "cancel"), ("Tab", "kids")],
        Focus::Kids if narrow => vec![("↑↓", "kid"), ("p", "private"), ("q", "quit")],
        Focus::Kids => vec![
            ("↑↓", "kid"),
            ("PgUp/PgDn", "moments"),
            ("p", "private"),
            ("r", "refresh"),
            ("s", "seed demo"),
            ("e", "viewer"),
            ("q", "quit"),
        ],
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let ctx = LayoutContext::from_rect(area);
    let mut spans = Vec::new();

    if app.state.is_seeding() {
        spans.push(Span::styled(
            format!("{} Seeding demo data...  ", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_LOADING),
        ));
    }

    for (i, (key, action)) in keybind_hints(app.focus, ctx.is_narrow()).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
