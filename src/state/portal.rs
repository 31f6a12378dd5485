//! Portal state
//!
//! Ties the viewer session, the roster and the timeline loader together.
//! User actions and fetch completions go in; [`FetchCommand`]s come out for
//! the caller to execute. Nothing here performs I/O.

use tracing::{info, warn};

use crate::error::FetchError;
use crate::models::{kid_count_label, Kid, KidId, Timeline};
use crate::state::roster::{KidRoster, RosterOutcome, RosterTicket};
use crate::state::timeline::{
    LoadedTimeline, SelectionState, TimelineLoader, TimelineOutcome, TimelineTicket,
};
use crate::state::viewer::{ViewerError, ViewerSession};

/// A fetch the caller must perform, reporting the result back through the
/// matching `on_*` method.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchCommand {
    Kids(RosterTicket),
    Timeline(TimelineTicket),
    Seed,
}

#[derive(Debug)]
pub struct PortalState {
    viewer: ViewerSession,
    roster: KidRoster,
    timeline: TimelineLoader,
    include_private: bool,
    seeding: bool,
    error: Option<String>,
}

impl PortalState {
    pub fn new(viewer_email: impl Into<String>) -> Self {
        Self {
            viewer: ViewerSession::new(viewer_email),
            roster: KidRoster::new(),
            timeline: TimelineLoader::new(),
            include_private: false,
            seeding: false,
            error: None,
        }
    }

    // ========================================================================
    // User actions
    // ========================================================================

    /// Initial roster load for the configured viewer.
    pub fn start(&mut self) -> FetchCommand {
        self.load_roster()
    }

    pub fn edit_viewer(&mut self, email: impl Into<String>) {
        self.viewer.edit(email);
    }

    pub fn viewer_mut(&mut self) -> &mut ViewerSession {
        &mut self.viewer
    }

    /// Apply the pending viewer email and reload the roster for it.
    pub fn apply_viewer(&mut self) -> Result<FetchCommand, ViewerError> {
        self.error = None;
        match self.viewer.apply() {
            Ok(viewer) => {
                info!(viewer = %viewer, "viewer applied");
                Ok(self.load_roster())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Reload the roster for the applied viewer.
    pub fn refresh(&mut self) -> FetchCommand {
        self.error = None;
        self.load_roster()
    }

    /// Ask for demo data. Ignored while a seed request is still running.
    pub fn request_seed(&mut self) -> Option<FetchCommand> {
        if self.seeding {
            return None;
        }
        self.error = None;
        self.seeding = true;
        Some(FetchCommand::Seed)
    }

    /// Flip the private toggle and reload the active kid's timeline.
    pub fn toggle_private(&mut self) -> Option<FetchCommand> {
        self.error = None;
        self.include_private = !self.include_private;
        self.load_timeline()
    }

    pub fn select_kid(&mut self, kid_id: &KidId) -> Option<FetchCommand> {
        if !self.roster.select(kid_id) {
            return None;
        }
        self.error = None;
        self.load_timeline()
    }

    pub fn select_next(&mut self) -> Option<FetchCommand> {
        if !self.roster.select_next() {
            return None;
        }
        self.error = None;
        self.load_timeline()
    }

    pub fn select_previous(&mut self) -> Option<FetchCommand> {
        if !self.roster.select_previous() {
            return None;
        }
        self.error = None;
        self.load_timeline()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // ========================================================================
    // Fetch completions
    // ========================================================================

    /// Apply a roster response. Returns the timeline fetch for the selected
    /// kid when the roster was replaced and is not empty.
    pub fn on_kids_loaded(
        &mut self,
        ticket: &RosterTicket,
        result: Result<Vec<Kid>, FetchError>,
    ) -> Option<FetchCommand> {
        match self.roster.accept(ticket, result) {
            RosterOutcome::Stale => None,
            RosterOutcome::Loaded { active: Some(_) } => self.load_timeline(),
            RosterOutcome::Loaded { active: None } => {
                self.timeline.reset();
                None
            }
            RosterOutcome::Failed(err) => {
                self.error = Some(err.user_message());
                None
            }
        }
    }

    /// Apply a timeline response. Returns true when it replaced the
    /// timeline on screen.
    pub fn on_timeline_loaded(
        &mut self,
        ticket: &TimelineTicket,
        result: Result<Timeline, FetchError>,
    ) -> bool {
        match self.timeline.accept(ticket, result) {
            TimelineOutcome::Loaded => true,
            TimelineOutcome::Failed(err) => {
                self.error = Some(err.user_message());
                false
            }
            TimelineOutcome::Stale => false,
        }
    }

    /// Seed finished. On success the roster is reloaded for the applied
    /// viewer; a failure is reported and not retried.
    pub fn on_seed_completed(&mut self, result: Result<(), FetchError>) -> Option<FetchCommand> {
        self.seeding = false;
        match result {
            Ok(()) => {
                info!("demo data seeded");
                Some(self.load_roster())
            }
            Err(err) => {
                warn!(error = %err, error_code = err.error_code(), "seeding failed");
                self.error = Some(err.user_message());
                None
            }
        }
    }

    fn load_roster(&mut self) -> FetchCommand {
        FetchCommand::Kids(self.roster.begin_fetch(self.viewer.applied()))
    }

    fn load_timeline(&mut self) -> Option<FetchCommand> {
        let kid_id = self.roster.active_id()?.clone();
        let ticket = self
            .timeline
            .begin_fetch(&kid_id, self.viewer.applied(), self.include_private);
        Some(FetchCommand::Timeline(ticket))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn viewer(&self) -> &ViewerSession {
        &self.viewer
    }

    pub fn roster(&self) -> &KidRoster {
        &self.roster
    }

    pub fn kids(&self) -> &[Kid] {
        self.roster.kids()
    }

    pub fn active_kid(&self) -> Option<&Kid> {
        self.roster.active_kid()
    }

    pub fn kid_count_label(&self) -> String {
        kid_count_label(self.roster.kids().len())
    }

    pub fn include_private(&self) -> bool {
        self.include_private
    }

    pub fn is_seeding(&self) -> bool {
        self.seeding
    }

    pub fn is_roster_loading(&self) -> bool {
        self.roster.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selection_state(&self) -> SelectionState {
        if self.roster.active_id().is_none() {
            SelectionState::Unselected
        } else {
            self.timeline.state()
        }
    }

    /// The timeline to display: the last one loaded for the active kid under
    /// the applied viewer.
    pub fn visible_timeline(&self) -> Option<&LoadedTimeline> {
        self.timeline
            .visible_for(self.roster.active_id(), self.viewer.applied())
    }

    /// Whether to show the "private moments are hidden" notice.
    pub fn should_warn(&self) -> bool {
        self.visible_timeline()
            .is_some_and(LoadedTimeline::private_withheld)
    }
}
