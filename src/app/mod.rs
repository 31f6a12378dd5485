//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which UI component has focus
//! - [`AppMessage`] - Messages for async communication
//!
//! The [`App`] owns the [`PortalState`] and the API client. User actions
//! update the state, and any fetch the state asks for runs on a spawned task
//! that reports back through the message channel.

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::Focus;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::api::PortalApi;
use crate::config::PortalConfig;
use crate::state::{PortalState, SelectionState};
use crate::traits::HttpError;

/// Main application state
pub struct App {
    /// Viewer, roster and timeline state
    pub state: PortalState,
    /// Backend client (cloned into fetch tasks)
    pub api: PortalApi,
    /// Current focus
    pub focus: Focus,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Moments scrolled off the top of the timeline panel
    pub timeline_scroll: usize,
    /// Receiver for fetch results (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for fetch results (cloned into async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create an App for `config`, talking to the backend over reqwest.
    pub fn new(config: &PortalConfig) -> Result<Self, HttpError> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout())?;
        let api = PortalApi::new(config.backend_url.clone(), Arc::new(http));
        Ok(Self::with_api(api, config.default_viewer.clone()))
    }

    /// Create an App around an existing API client.
    pub fn with_api(api: PortalApi, viewer_email: impl Into<String>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: PortalState::new(viewer_email),
            api,
            focus: Focus::default(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            timeline_scroll: 0,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Whether any fetch is outstanding. Drives the spinner.
    pub fn is_busy(&self) -> bool {
        self.state.is_roster_loading()
            || self.state.is_seeding()
            || self.state.selection_state() == SelectionState::Loading
    }

    /// Advance the animation tick. Only redraws while something is loading.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_busy() {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("api", &self.api)
            .field("focus", &self.focus)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;

    fn app() -> App {
        let api = PortalApi::new("http://portal.test", Arc::new(MockHttpClient::new()));
        App::with_api(api, "grandma@family.demo")
    }

    #[test]
    fn test_new_app_needs_redraw() {
        let app = app();
        assert!(app.needs_redraw);
        assert_eq!(app.focus, Focus::Kids);
        assert!(app.message_rx.is_some());
        assert_eq!(app.state.viewer().applied().email, "grandma@family.demo");
    }

    #[test]
    fn test_tick_redraws_only_when_busy() {
        let mut app = app();
        app.needs_redraw = false;
        app.tick();
        assert!(!app.needs_redraw);
        assert_eq!(app.tick_count, 1);

        app.state.request_seed();
        app.tick();
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_new_from_config() {
        let config = PortalConfig::default().with_backend_url("http://portal.test/");
        let app = App::new(&config).unwrap();
        assert_eq!(app.api.base_url(), "http://portal.test");
    }
}
