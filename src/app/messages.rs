//! AppMessage enum for async communication within the application.

use crate::error::FetchError;
use crate::models::{Kid, Timeline};
use crate::state::{RosterTicket, TimelineTicket};

/// Results of fetches running on spawned tasks.
///
/// Each carries the ticket it was issued with so the state can tell whether
/// it is still the latest one.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Roster fetch finished
    KidsLoaded {
        ticket: RosterTicket,
        result: Result<Vec<Kid>, FetchError>,
    },
    /// Timeline fetch finished
    TimelineLoaded {
        ticket: TimelineTicket,
        result: Result<Timeline, FetchError>,
    },
    /// Seed request finished
    SeedCompleted { result: Result<(), FetchError> },
}

impl AppMessage {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            AppMessage::KidsLoaded { .. } => "KidsLoaded",
            AppMessage::TimelineLoaded { .. } => "TimelineLoaded",
            AppMessage::SeedCompleted { .. } => "SeedCompleted",
        }
    }
}
