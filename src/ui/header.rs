//! Header, viewer field and error banner.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, BorderType, Paragraph},
};

use crate::app::{App, Focus};

use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_INPUT_BG, COLOR_WARNING,
};

pub const TITLE: &str = "Little Years – Grandparent Portal";

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Signed in as {}", app.state.viewer().applied()),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_viewer_field(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Viewer;
    let viewer = app.state.viewer();

    let border_color = if focused { COLOR_BORDER_FOCUSED } else { COLOR_BORDER };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(" Viewer email ");
    if viewer.has_pending_edit() {
        block = block.title_bottom(Line::from(Span::styled(
            " not applied, Enter to apply ",
            Style::default().fg(COLOR_WARNING),
        )));
    }

    let mut spans = vec![Span::styled(
        viewer.pending_email().to_string(),
        Style::default().fg(COLOR_ACCENT),
    )];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(COLOR_ACCENT)));
    }

    let field = Paragraph::new(Line::from(spans))
        .block(block)
        .style(Style::default().bg(COLOR_INPUT_BG));
    frame.render_widget(field, area);
}

pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled("✗ ", Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD)),
        Span::styled(message.to_string(), Style::default().fg(COLOR_ERROR)),
    ]));
    frame.render_widget(banner, area);
}
