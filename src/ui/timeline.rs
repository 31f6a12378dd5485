//! Timeline panel for the active kid.
//!
//! Shows the last accepted timeline for the active kid. While a newer
//! request is pending the previous moments stay on screen under a spinner.
//! The withheld-privacy notice depends only on the accepted response.
//! PageUp/PageDown scroll by whole moments.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, BorderType, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Moment, Visibility};
use crate::state::SelectionState;

use super::helpers::{moment_icon, spinner_frame, visibility_badge};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_LOADING, COLOR_PRIVATE,
    COLOR_PUBLIC, COLOR_WARNING,
};

pub const PRIVATE_HIDDEN_TEXT: &str = "Private moments are hidden for this viewer.";
pub const NO_MOMENTS_TEXT: &str = "No moments yet.";

pub fn render_timeline(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;

    let title = match state.active_kid() {
        Some(kid) => format!(" {}'s moments ", kid.name),
        None => " Moments ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(title);

    let mut lines = Vec::new();

    match state.selection_state() {
        SelectionState::Unselected => {
            if !state.kids().is_empty() || state.is_roster_loading() {
                lines.push(dim("Select a kid to see their moments."));
            }
        }
        SelectionState::Loading => {
            lines.push(Line::from(Span::styled(
                format!("{} Loading moments...", spinner_frame(app.tick_count)),
                Style::default().fg(COLOR_LOADING),
            )));
        }
        SelectionState::Failed if state.visible_timeline().is_none() => {
            lines.push(Line::from(Span::styled(
                "Moments could not be loaded. Press r to retry.",
                Style::default().fg(COLOR_ERROR),
            )));
        }
        SelectionState::Failed | SelectionState::Loaded => {}
    }

    if state.should_warn() {
        lines.push(Line::from(Span::styled(
            PRIVATE_HIDDEN_TEXT,
            Style::default().fg(COLOR_WARNING).add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(loaded) = state.visible_timeline() {
        let moments = &loaded.timeline.moments;
        if moments.is_empty() {
            lines.push(dim(NO_MOMENTS_TEXT));
        }
        let skipped = app.timeline_scroll.min(moments.len().saturating_sub(1));
        if skipped > 0 {
            lines.push(Line::from(Span::styled(
                format!("  {} more above (PgUp)", skipped),
                Style::default().fg(COLOR_DIM),
            )));
        }
        for moment in moments.iter().skip(skipped) {
            lines.push(Line::default());
            lines.extend(moment_lines(moment));
        }
    }

    let panel = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(panel, area);
}

fn moment_lines(moment: &Moment) -> Vec<Line<'static>> {
    let badge_color = match moment.visibility {
        Visibility::Public => COLOR_PUBLIC,
        Visibility::Private => COLOR_PRIVATE,
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} ", moment_icon(moment.kind))),
        Span::styled(
            moment.title.clone(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(visibility_badge(moment.visibility), Style::default().fg(badge_color)),
    ])];

    if let Some(description) = moment.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::from(Span::raw(format!("  {}", description))));
    }
    lines.push(Line::from(Span::styled(
        format!("  {} {}", moment.kind.label(), moment.preview_url()),
        Style::default().fg(COLOR_DIM),
    )));
    lines
}

fn dim(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(COLOR_DIM)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MomentType;

    #[test]
    fn test_moment_lines_include_description_and_url() {
        let moment = Moment {
            id: "10".to_string(),
            kind: MomentType::Art,
            title: "Finger painting".to_string(),
            description: Some("Blue period".to_string()),
            media_url: "https://media.example/10.png".to_string(),
            thumbnail_url: Some("https://media.example/10-thumb.png".to_string()),
            visibility: Visibility::Private,
        };

        let text: Vec<String> = moment_lines(&moment)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert_eq!(text[0], "🎨 Finger painting [private]");
        assert_eq!(text[1], "  Blue period");
        assert_eq!(text[2], "  art https://media.example/10-thumb.png");
    }

    #[test]
    fn test_moment_lines_skip_empty_description() {
        let moment = Moment {
            id: "11".to_string(),
            kind: MomentType::Audio,
            title: "First words".to_string(),
            description: Some(String::new()),
            media_url: "https://media.example/11.mp3".to_string(),
            thumbnail_url: None,
            visibility: Visibility::Public,
        };
        assert_eq!(moment_lines(&moment).len(), 2);
    }
}
