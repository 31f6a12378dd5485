//! Kid list panel.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, BorderType, Paragraph, Wrap},
};

use crate::app::{App, Focus};

use super::helpers::{spinner_frame, truncate_string};
use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_LOADING,
};

pub const EMPTY_ROSTER_TEXT: &str = "No kids found for this viewer. Try seeding demo data.";
pub const PRIVATE_TOGGLE_TEXT: &str = "Show private moments (if authorized)";

/// Lines per kid entry: name, then viewer count.
const KID_ROWS: usize = 2;

pub fn render_roster(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let border_color = if app.focus == Focus::Kids {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(" Kids ");
    let inner_width = area.width.saturating_sub(4) as usize;

    let mut lines = Vec::new();

    let mut count = vec![Span::styled(
        format!("{} visible to this viewer", state.kid_count_label()),
        Style::default().fg(COLOR_ACCENT),
    )];
    if state.is_roster_loading() {
        count.push(Span::styled(
            format!(" {}", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_LOADING),
        ));
    }
    lines.push(Line::from(count));

    let checkbox = if state.include_private() { "[x]" } else { "[ ]" };
    lines.push(Line::from(Span::styled(
        truncate_string(
            &format!("{} {}", checkbox, PRIVATE_TOGGLE_TEXT),
            area.width.saturating_sub(2) as usize,
        ),
        Style::default().fg(COLOR_DIM),
    )));
    lines.push(Line::default());

    let kids = state.kids();
    if kids.is_empty() {
        // Before the first response there is nothing to say yet.
        if state.roster().viewer().is_some() {
            lines.push(Line::from(Span::styled(
                EMPTY_ROSTER_TEXT,
                Style::default().fg(COLOR_DIM),
            )));
        }
        let panel = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(panel, area);
        return;
    }

    let rows = (area.height.saturating_sub(2) as usize).saturating_sub(lines.len());
    let active = state.roster().active_index();
    let (offset, shown) = kid_window(kids.len(), active.unwrap_or(0), rows);

    if offset > 0 {
        lines.push(Line::from(Span::styled(
            format!("  {} more above", offset),
            Style::default().fg(COLOR_DIM),
        )));
    }

    for (i, kid) in kids.iter().enumerate().skip(offset).take(shown) {
        let (marker, style) = if active == Some(i) {
            ("▸ ", Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(COLOR_ACCENT))
        };
        let name = truncate_string(&kid.display_name(), inner_width.saturating_sub(2));
        lines.push(Line::from(Span::styled(format!("{}{}", marker, name), style)));
        lines.push(Line::from(Span::styled(
            format!("  Authorized viewers: {}", kid.allowed_viewer_count()),
            Style::default().fg(COLOR_DIM),
        )));
    }

    let below = kids.len() - offset - shown;
    if below > 0 {
        lines.push(Line::from(Span::styled(
            format!("  {} more below", below),
            Style::default().fg(COLOR_DIM),
        )));
    }

    // Kid lines are pre-truncated, so no wrapping: row math stays exact.
    let panel = Paragraph::new(lines).block(block);
    frame.render_widget(panel, area);
}

/// First kid to draw and how many fit in `rows` lines, keeping `active` on
/// screen. When not every kid fits, two lines go to the more above/below
/// indicators.
fn kid_window(total: usize, active: usize, rows: usize) -> (usize, usize) {
    if total * KID_ROWS <= rows {
        return (0, total);
    }
    let shown = (rows.saturating_sub(2) / KID_ROWS).clamp(1, total);
    let offset = if active >= shown { active - shown + 1 } else { 0 };
    (offset.min(total - shown), shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kid_window_shows_everyone_when_they_fit() {
        assert_eq!(kid_window(3, 2, 6), (0, 3));
        assert_eq!(kid_window(0, 0, 10), (0, 0));
    }

    #[test]
    fn test_kid_window_follows_active_kid() {
        // 19 rows: two for indicators, eight kids of two lines each
        assert_eq!(kid_window(30, 0, 19), (0, 8));
        assert_eq!(kid_window(30, 7, 19), (0, 8));
        assert_eq!(kid_window(30, 8, 19), (1, 8));
        assert_eq!(kid_window(30, 29, 19), (22, 8));
    }

    #[test]
    fn test_kid_window_keeps_one_kid_in_tiny_panels() {
        assert_eq!(kid_window(5, 4, 1), (4, 1));
        assert_eq!(kid_window(5, 0, 0), (0, 1));
    }
}
