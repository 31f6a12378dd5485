//! Kid roster state
//!
//! Holds the kids the applied viewer may see and which one is active.
//! Every roster fetch is issued a [`RosterTicket`]; a response is applied
//! only while its ticket is the latest one.

use tracing::{debug, info};

use crate::error::FetchError;
use crate::models::{Kid, KidId, Viewer};
use crate::state::generation::{Generation, GenerationGuard};

/// Identifies one issued roster fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterTicket {
    pub generation: Generation,
    pub viewer: Viewer,
}

/// What accepting a roster response did.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterOutcome {
    /// A newer fetch was issued after this one. Nothing changed.
    Stale,
    /// The roster was replaced. `active` is the selection afterwards.
    Loaded { active: Option<KidId> },
    /// The fetch failed. The previous roster and selection are retained.
    Failed(FetchError),
}

/// Pick the selection after a roster refresh.
///
/// The previous kid stays selected if it is still listed. Otherwise the
/// first kid is selected, or nothing when the roster is empty.
pub fn select_after_refresh(previous: Option<&KidId>, kids: &[Kid]) -> Option<KidId> {
    if let Some(previous) = previous {
        if kids.iter().any(|kid| &kid.id == previous) {
            return Some(previous.clone());
        }
    }
    kids.first().map(|kid| kid.id.clone())
}

#[derive(Debug, Default)]
pub struct KidRoster {
    kids: Vec<Kid>,
    active: Option<KidId>,
    /// Viewer the displayed roster was fetched for
    viewer: Option<Viewer>,
    loading: bool,
    guard: GenerationGuard,
}

impl KidRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for `viewer`, superseding any fetch still in flight.
    pub fn begin_fetch(&mut self, viewer: &Viewer) -> RosterTicket {
        let generation = self.guard.issue();
        self.loading = true;
        debug!(%generation, viewer = %viewer, "roster fetch issued");
        RosterTicket {
            generation,
            viewer: viewer.clone(),
        }
    }

    pub fn is_current(&self, ticket: &RosterTicket) -> bool {
        self.guard.is_current(ticket.generation)
    }

    pub fn accept(
        &mut self,
        ticket: &RosterTicket,
        result: Result<Vec<Kid>, FetchError>,
    ) -> RosterOutcome {
        if !self.is_current(ticket) {
            debug!(
                generation = %ticket.generation,
                latest = self.guard.latest(),
                "dropping stale roster response"
            );
            return RosterOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(kids) => {
                self.active = select_after_refresh(self.active.as_ref(), &kids);
                info!(
                    viewer = %ticket.viewer,
                    count = kids.len(),
                    active = ?self.active,
                    "roster loaded"
                );
                self.kids = kids;
                self.viewer = Some(ticket.viewer.clone());
                RosterOutcome::Loaded {
                    active: self.active.clone(),
                }
            }
            Err(err) => {
                info!(
                    viewer = %ticket.viewer,
                    error = %err,
                    error_code = err.error_code(),
                    "roster fetch failed"
                );
                RosterOutcome::Failed(err)
            }
        }
    }

    /// Make `kid_id` active. Returns false if it is not listed or already active.
    pub fn select(&mut self, kid_id: &KidId) -> bool {
        if self.active.as_ref() == Some(kid_id) || !self.kids.iter().any(|k| &k.id == kid_id) {
            return false;
        }
        self.active = Some(kid_id.clone());
        true
    }

    /// Move the selection down one kid, wrapping at the end.
    pub fn select_next(&mut self) -> bool {
        self.step(1)
    }

    /// Move the selection up one kid, wrapping at the start.
    pub fn select_previous(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> bool {
        let len = self.kids.len();
        if len == 0 {
            return false;
        }
        let target = match self.active_index() {
            Some(index) => (index as isize + delta).rem_euclid(len as isize) as usize,
            None => 0,
        };
        let id = self.kids[target].id.clone();
        self.select(&id)
    }

    pub fn kids(&self) -> &[Kid] {
        &self.kids
    }

    pub fn is_empty(&self) -> bool {
        self.kids.is_empty()
    }

    pub fn active_id(&self) -> Option<&KidId> {
        self.active.as_ref()
    }

    pub fn active_kid(&self) -> Option<&Kid> {
        let active = self.active.as_ref()?;
        self.kids.iter().find(|kid| &kid.id == active)
    }

    pub fn active_index(&self) -> Option<usize> {
        let active = self.active.as_ref()?;
        self.kids.iter().position(|kid| &kid.id == active)
    }

    pub fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;

    fn kids(ids: &[&str]) -> Vec<Kid> {
        ids.iter().map(|id| Kid::new(*id, format!("Kid {id}"))).collect()
    }

    fn viewer(email: &str) -> Viewer {
        Viewer::new(email)
    }

    #[test]
    fn test_select_after_refresh_keeps_previous() {
        let previous = KidId::new("2");
        assert_eq!(
            select_after_refresh(Some(&previous), &kids(&["1", "2", "3"])),
            Some(KidId::new("2"))
        );
    }

    #[test]
    fn test_select_after_refresh_falls_back_to_first() {
        let previous = KidId::new("9");
        assert_eq!(
            select_after_refresh(Some(&previous), &kids(&["1", "2"])),
            Some(KidId::new("1"))
        );
        assert_eq!(select_after_refresh(None, &kids(&["4"])), Some(KidId::new("4")));
    }

    #[test]
    fn test_select_after_refresh_empty() {
        let previous = KidId::new("1");
        assert_eq!(select_after_refresh(Some(&previous), &[]), None);
        assert_eq!(select_after_refresh(None, &[]), None);
    }

    #[test]
    fn test_accept_loads_and_selects_first() {
        let mut roster = KidRoster::new();
        let ticket = roster.begin_fetch(&viewer("a@x"));
        assert!(roster.is_loading());

        let outcome = roster.accept(&ticket, Ok(kids(&["1", "2"])));
        assert_eq!(
            outcome,
            RosterOutcome::Loaded {
                active: Some(KidId::new("1"))
            }
        );
        assert!(!roster.is_loading());
        assert_eq!(roster.kids().len(), 2);
        assert_eq!(roster.viewer(), Some(&viewer("a@x")));
    }

    #[test]
    fn test_stale_success_is_dropped() {
        let mut roster = KidRoster::new();
        let old = roster.begin_fetch(&viewer("a@x"));
        let new = roster.begin_fetch(&viewer("b@x"));

        assert_eq!(roster.accept(&new, Ok(kids(&["7"]))), RosterOutcome::Loaded {
            active: Some(KidId::new("7"))
        });
        assert_eq!(roster.accept(&old, Ok(kids(&["1", "2"]))), RosterOutcome::Stale);

        assert_eq!(roster.kids().len(), 1);
        assert_eq!(roster.viewer(), Some(&viewer("b@x")));
    }

    #[test]
    fn test_stale_failure_is_dropped() {
        let mut roster = KidRoster::new();
        let old = roster.begin_fetch(&viewer("a@x"));
        let _new = roster.begin_fetch(&viewer("b@x"));

        let outcome = roster.accept(&old, Err(FetchError::http(Operation::Kids, 500)));
        assert_eq!(outcome, RosterOutcome::Stale);
        assert!(roster.is_loading());
    }

    #[test]
    fn test_failure_retains_previous_roster() {
        let mut roster = KidRoster::new();
        let first = roster.begin_fetch(&viewer("a@x"));
        roster.accept(&first, Ok(kids(&["1", "2"])));
        roster.select(&KidId::new("2"));

        let second = roster.begin_fetch(&viewer("a@x"));
        let err = FetchError::http(Operation::Kids, 502);
        assert_eq!(roster.accept(&second, Err(err.clone())), RosterOutcome::Failed(err));

        assert_eq!(roster.kids().len(), 2);
        assert_eq!(roster.active_id(), Some(&KidId::new("2")));
        assert!(!roster.is_loading());
    }

    #[test]
    fn test_refresh_keeps_selection_when_still_listed() {
        let mut roster = KidRoster::new();
        let first = roster.begin_fetch(&viewer("a@x"));
        roster.accept(&first, Ok(kids(&["1", "2", "3"])));
        assert!(roster.select(&KidId::new("3")));

        let second = roster.begin_fetch(&viewer("a@x"));
        roster.accept(&second, Ok(kids(&["3", "1"])));
        assert_eq!(roster.active_id(), Some(&KidId::new("3")));
        assert_eq!(roster.active_index(), Some(0));
    }

    #[test]
    fn test_select_ignores_unknown_and_current() {
        let mut roster = KidRoster::new();
        let ticket = roster.begin_fetch(&viewer("a@x"));
        roster.accept(&ticket, Ok(kids(&["1", "2"])));

        assert!(!roster.select(&KidId::new("1")));
        assert!(!roster.select(&KidId::new("42")));
        assert!(roster.select(&KidId::new("2")));
        assert_eq!(roster.active_kid().map(|k| k.name.as_str()), Some("Kid 2"));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut roster = KidRoster::new();
        let ticket = roster.begin_fetch(&viewer("a@x"));
        roster.accept(&ticket, Ok(kids(&["1", "2", "3"])));

        assert!(roster.select_previous());
        assert_eq!(roster.active_id(), Some(&KidId::new("3")));
        assert!(roster.select_next());
        assert_eq!(roster.active_id(), Some(&KidId::new("1")));
        assert!(roster.select_next());
        assert_eq!(roster.active_id(), Some(&KidId::new("2")));
    }

    #[test]
    fn test_navigation_on_single_or_empty_roster() {
        let mut roster = KidRoster::new();
        assert!(!roster.select_next());

        let ticket = roster.begin_fetch(&viewer("a@x"));
        roster.accept(&ticket, Ok(kids(&["1"])));
        assert!(!roster.select_next());
        assert!(!roster.select_previous());
    }

    #[test]
    fn test_empty_roster_clears_selection() {
        let mut roster = KidRoster::new();
        let first = roster.begin_fetch(&viewer("a@x"));
        roster.accept(&first, Ok(kids(&["1"])));

        let second = roster.begin_fetch(&viewer("nobody@x"));
        let outcome = roster.accept(&second, Ok(Vec::new()));
        assert_eq!(outcome, RosterOutcome::Loaded { active: None });
        assert!(roster.is_empty());
        assert!(roster.active_kid().is_none());
    }
}
