//! Message and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::{App, AppMessage, Focus};

/// Moments moved per PageUp/PageDown.
const TIMELINE_PAGE: isize = 5;

impl App {
    /// Handle an incoming async message.
    /// All messages mark the app as dirty since they may update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        trace!(message = msg.name(), "handling message");

        let follow_up = match msg {
            AppMessage::KidsLoaded { ticket, result } => self.state.on_kids_loaded(&ticket, result),
            AppMessage::TimelineLoaded { ticket, result } => {
                if self.state.on_timeline_loaded(&ticket, result) {
                    self.timeline_scroll = 0;
                }
                None
            }
            AppMessage::SeedCompleted { result } => self.state.on_seed_completed(result),
        };

        if let Some(command) = follow_up {
            self.dispatch(command);
        }
    }

    /// Handle a key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();

        // Global keybinds (always active)
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.cycle_focus();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Viewer => self.handle_viewer_key(key),
            Focus::Kids => self.handle_kids_key(key),
        }
    }

    /// Bracketed paste goes into the viewer field only.
    pub fn handle_paste(&mut self, text: &str) {
        if self.focus != Focus::Viewer {
            return;
        }
        let viewer = self.state.viewer_mut();
        for c in text.chars().filter(|c| !c.is_control()) {
            viewer.push_char(c);
        }
        self.mark_dirty();
    }

    fn handle_viewer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.apply_viewer(),
            KeyCode::Esc => self.cancel_viewer_edit(),
            KeyCode::Backspace => self.state.viewer_mut().backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.viewer_mut().push_char(c);
            }
            _ => {}
        }
    }

    fn handle_kids_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous_kid(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_kid(),
            KeyCode::PageDown => self.scroll_timeline(TIMELINE_PAGE),
            KeyCode::PageUp => self.scroll_timeline(-TIMELINE_PAGE),
            KeyCode::Home => self.scroll_timeline_to_top(),
            KeyCode::Char('p') => self.toggle_private(),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('s') => self.seed(),
            KeyCode::Char('e') | KeyCode::Char('/') => self.focus = Focus::Viewer,
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc => self.state.dismiss_error(),
            _ => {}
        }
    }
}
