//! Application state management
//!
//! This module contains the state containers for the portal:
//! - ViewerSession: applied and pending viewer email
//! - KidRoster: kids visible to the viewer and the active selection
//! - TimelineLoader: the active kid's timeline and its load state
//! - PortalState: the composite driven by user actions and fetch results
//!
//! Roster and timeline fetches are each guarded by a generation counter so
//! that only the latest response for a target is ever applied.

pub mod generation;
pub mod portal;
pub mod reconcile;
pub mod roster;
pub mod timeline;
pub mod viewer;

pub use generation::{Generation, GenerationGuard};
pub use portal::{FetchCommand, PortalState};
pub use reconcile::reconcile;
pub use roster::{select_after_refresh, KidRoster, RosterOutcome, RosterTicket};
pub use timeline::{LoadedTimeline, SelectionState, TimelineLoader, TimelineOutcome, TimelineTicket};
pub use viewer::{ViewerError, ViewerSession};
