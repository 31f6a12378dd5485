//! Timeline loading for the active kid.
//!
//! Each timeline fetch is keyed by kid, viewer and the private flag. A new
//! fetch supersedes the previous one; the response of a superseded fetch is
//! dropped whether it succeeded or failed.

use tracing::{debug, info};

use crate::error::FetchError;
use crate::models::{KidId, Timeline, Viewer};
use crate::state::generation::{Generation, GenerationGuard};
use crate::state::reconcile::reconcile;

/// Identifies one issued timeline fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineTicket {
    pub generation: Generation,
    pub kid_id: KidId,
    pub viewer: Viewer,
    pub include_private: bool,
}

/// Selection lifecycle of the timeline pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Unselected,
    Loading,
    Loaded,
    Failed,
}

/// A timeline together with the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTimeline {
    pub timeline: Timeline,
    pub viewer: Viewer,
    /// Whether private moments were asked for
    pub requested_private: bool,
}

impl LoadedTimeline {
    /// Private moments were requested but the server did not grant them.
    pub fn private_withheld(&self) -> bool {
        reconcile(self.requested_private, self.timeline.includes_private)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TimelineOutcome {
    Stale,
    Loaded,
    Failed(FetchError),
}

#[derive(Debug, Default)]
pub struct TimelineLoader {
    state: SelectionState,
    latest: Option<LoadedTimeline>,
    guard: GenerationGuard,
}

impl TimelineLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(
        &mut self,
        kid_id: &KidId,
        viewer: &Viewer,
        include_private: bool,
    ) -> TimelineTicket {
        let generation = self.guard.issue();
        self.state = SelectionState::Loading;
        debug!(
            %generation,
            kid_id = %kid_id,
            viewer = %viewer,
            include_private,
            "timeline fetch issued"
        );
        TimelineTicket {
            generation,
            kid_id: kid_id.clone(),
            viewer: viewer.clone(),
            include_private,
        }
    }

    pub fn is_current(&self, ticket: &TimelineTicket) -> bool {
        self.guard.is_current(ticket.generation)
    }

    /// Apply a response. A failure keeps the last loaded timeline.
    pub fn accept(
        &mut self,
        ticket: &TimelineTicket,
        result: Result<Timeline, FetchError>,
    ) -> TimelineOutcome {
        if !self.is_current(ticket) {
            debug!(
                generation = %ticket.generation,
                kid_id = %ticket.kid_id,
                "dropping stale timeline response"
            );
            return TimelineOutcome::Stale;
        }

        match result {
            Ok(timeline) => {
                info!(
                    kid_id = %ticket.kid_id,
                    moments = timeline.moments.len(),
                    requested_private = ticket.include_private,
                    includes_private = timeline.includes_private,
                    "timeline loaded"
                );
                self.state = SelectionState::Loaded;
                self.latest = Some(LoadedTimeline {
                    timeline,
                    viewer: ticket.viewer.clone(),
                    requested_private: ticket.include_private,
                });
                TimelineOutcome::Loaded
            }
            Err(err) => {
                info!(
                    kid_id = %ticket.kid_id,
                    error = %err,
                    error_code = err.error_code(),
                    "timeline fetch failed"
                );
                self.state = SelectionState::Failed;
                TimelineOutcome::Failed(err)
            }
        }
    }

    /// Forget everything and drop any fetch in flight. Used when no kid is
    /// selectable anymore.
    pub fn reset(&mut self) {
        self.guard.invalidate();
        self.state = SelectionState::Unselected;
        self.latest = None;
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn latest(&self) -> Option<&LoadedTimeline> {
        self.latest.as_ref()
    }

    /// The last loaded timeline, if it belongs to `kid_id` and was fetched
    /// as `viewer`.
    pub fn visible_for(&self, kid_id: Option<&KidId>, viewer: &Viewer) -> Option<&LoadedTimeline> {
        let kid_id = kid_id?;
        self.latest
            .as_ref()
            .filter(|loaded| &loaded.timeline.kid_id == kid_id && &loaded.viewer == viewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;

    fn timeline(kid: &str, includes_private: bool) -> Timeline {
        Timeline {
            kid_id: KidId::new(kid),
            includes_private,
            moments: Vec::new(),
        }
    }

    fn grandma() -> Viewer {
        Viewer::new("grandma@family.demo")
    }

    #[test]
    fn test_lifecycle() {
        let mut loader = TimelineLoader::new();
        assert_eq!(loader.state(), SelectionState::Unselected);

        let ticket = loader.begin_fetch(&KidId::new("1"), &grandma(), false);
        assert_eq!(loader.state(), SelectionState::Loading);

        assert_eq!(loader.accept(&ticket, Ok(timeline("1", false))), TimelineOutcome::Loaded);
        assert_eq!(loader.state(), SelectionState::Loaded);

        let ticket = loader.begin_fetch(&KidId::new("1"), &grandma(), true);
        let err = FetchError::http(Operation::Timeline, 500);
        assert_eq!(
            loader.accept(&ticket, Err(err.clone())),
            TimelineOutcome::Failed(err)
        );
        assert_eq!(loader.state(), SelectionState::Failed);
        assert!(loader.latest().is_some());
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let mut loader = TimelineLoader::new();
        let for_a = loader.begin_fetch(&KidId::new("a"), &grandma(), false);
        let for_b = loader.begin_fetch(&KidId::new("b"), &grandma(), false);

        assert_eq!(loader.accept(&for_b, Ok(timeline("b", false))), TimelineOutcome::Loaded);
        assert_eq!(loader.accept(&for_a, Ok(timeline("a", false))), TimelineOutcome::Stale);
        assert_eq!(
            loader.latest().map(|l| l.timeline.kid_id.clone()),
            Some(KidId::new("b"))
        );
    }

    #[test]
    fn test_superseded_failure_does_not_change_state() {
        let mut loader = TimelineLoader::new();
        let old = loader.begin_fetch(&KidId::new("a"), &grandma(), false);
        let _new = loader.begin_fetch(&KidId::new("a"), &grandma(), true);

        let err = FetchError::http(Operation::Timeline, 503);
        assert_eq!(loader.accept(&old, Err(err)), TimelineOutcome::Stale);
        assert_eq!(loader.state(), SelectionState::Loading);
    }

    #[test]
    fn test_reset_drops_in_flight_fetch() {
        let mut loader = TimelineLoader::new();
        let first = loader.begin_fetch(&KidId::new("a"), &grandma(), false);
        loader.accept(&first, Ok(timeline("a", false)));

        let pending = loader.begin_fetch(&KidId::new("a"), &grandma(), true);
        loader.reset();

        assert_eq!(loader.state(), SelectionState::Unselected);
        assert!(loader.latest().is_none());
        assert_eq!(loader.accept(&pending, Ok(timeline("a", true))), TimelineOutcome::Stale);
        assert!(loader.latest().is_none());
    }

    #[test]
    fn test_visible_only_for_matching_kid_and_viewer() {
        let mut loader = TimelineLoader::new();
        let ticket = loader.begin_fetch(&KidId::new("a"), &grandma(), false);
        loader.accept(&ticket, Ok(timeline("a", false)));

        let a = KidId::new("a");
        let b = KidId::new("b");
        assert!(loader.visible_for(Some(&a), &grandma()).is_some());
        assert!(loader.visible_for(Some(&b), &grandma()).is_none());
        assert!(loader.visible_for(None, &grandma()).is_none());
        assert!(loader
            .visible_for(Some(&a), &Viewer::new("grandpa@family.demo"))
            .is_none());
    }

    #[test]
    fn test_private_withheld() {
        let mut loader = TimelineLoader::new();
        let ticket = loader.begin_fetch(&KidId::new("a"), &grandma(), true);
        loader.accept(&ticket, Ok(timeline("a", false)));
        assert!(loader.latest().unwrap().private_withheld());

        let ticket = loader.begin_fetch(&KidId::new("a"), &grandma(), true);
        loader.accept(&ticket, Ok(timeline("a", true)));
        assert!(!loader.latest().unwrap().private_withheld());

        let ticket = loader.begin_fetch(&KidId::new("a"), &grandma(), false);
        loader.accept(&ticket, Ok(timeline("a", false)));
        assert!(!loader.latest().unwrap().private_withheld());
    }
}
