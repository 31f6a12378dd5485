//! User actions and fetch dispatch for the App.

use tracing::debug;

use crate::state::FetchCommand;

use super::{App, AppMessage, Focus};

impl App {
    /// Load the roster for the configured viewer.
    pub fn start(&mut self) {
        let command = self.state.start();
        self.dispatch(command);
    }

    /// Apply the pending viewer email. On success focus returns to the list.
    pub fn apply_viewer(&mut self) {
        self.mark_dirty();
        if let Ok(command) = self.state.apply_viewer() {
            self.focus = Focus::Kids;
            self.dispatch(command);
        }
    }

    /// Discard the pending email and return focus to the list.
    pub fn cancel_viewer_edit(&mut self) {
        self.state.viewer_mut().revert();
        self.focus = Focus::Kids;
        self.mark_dirty();
    }

    pub fn refresh(&mut self) {
        let command = self.state.refresh();
        self.dispatch(command);
        self.mark_dirty();
    }

    pub fn seed(&mut self) {
        if let Some(command) = self.state.request_seed() {
            self.dispatch(command);
        }
        self.mark_dirty();
    }

    pub fn toggle_private(&mut self) {
        if let Some(command) = self.state.toggle_private() {
            self.dispatch(command);
        }
        self.mark_dirty();
    }

    pub fn select_next_kid(&mut self) {
        if let Some(command) = self.state.select_next() {
            self.dispatch(command);
        }
        self.mark_dirty();
    }

    pub fn select_previous_kid(&mut self) {
        if let Some(command) = self.state.select_previous() {
            self.dispatch(command);
        }
        self.mark_dirty();
    }

    /// Scroll the timeline by `delta` moments. Stops at the first and last
    /// moment.
    pub fn scroll_timeline(&mut self, delta: isize) {
        let last = self
            .state
            .visible_timeline()
            .map_or(0, |loaded| loaded.timeline.moments.len().saturating_sub(1));
        self.timeline_scroll = self.timeline_scroll.saturating_add_signed(delta).min(last);
        self.mark_dirty();
    }

    pub fn scroll_timeline_to_top(&mut self) {
        self.timeline_scroll = 0;
        self.mark_dirty();
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.toggled();
        self.mark_dirty();
    }

    /// Run `command` on a spawned task. The result comes back as an
    /// [`AppMessage`]; nothing here touches state.
    ///
    /// Requests are never cancelled. A superseded response is dropped when it
    /// arrives.
    pub fn dispatch(&self, command: FetchCommand) {
        let api = self.api.clone();
        let tx = self.message_tx.clone();

        match command {
            FetchCommand::Kids(ticket) => {
                debug!(generation = %ticket.generation, "spawning roster fetch");
                tokio::spawn(async move {
                    let result = api.fetch_kids(&ticket.viewer).await;
                    let _ = tx.send(AppMessage::KidsLoaded { ticket, result });
                });
            }
            FetchCommand::Timeline(ticket) => {
                debug!(
                    generation = %ticket.generation,
                    kid_id = %ticket.kid_id,
                    "spawning timeline fetch"
                );
                tokio::spawn(async move {
                    let result = api
                        .fetch_timeline(&ticket.kid_id, &ticket.viewer, ticket.include_private)
                        .await;
                    let _ = tx.send(AppMessage::TimelineLoaded { ticket, result });
                });
            }
            FetchCommand::Seed => {
                debug!("spawning seed request");
                tokio::spawn(async move {
                    let result = api.seed().await;
                    let _ = tx.send(AppMessage::SeedCompleted { result });
                });
            }
        }
    }
}
