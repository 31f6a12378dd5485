//! Generation tokens for discarding superseded responses.
//!
//! Every fetch is issued with a fresh [`Generation`]. When its response comes
//! back, it is applied only if no newer fetch has been issued for the same
//! target since. Older responses are dropped, never merged.

use std::fmt;

/// Token identifying one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic counter owned by one fetch target (the roster, the timeline).
#[derive(Debug, Default, Clone)]
pub struct GenerationGuard {
    current: u64,
}

impl GenerationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new fetch. All earlier tokens become stale.
    pub fn issue(&mut self) -> Generation {
        self.current += 1;
        Generation(self.current)
    }

    /// Make every outstanding token stale without issuing a new fetch.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    /// Whether `generation` is the most recently issued token.
    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.current
    }

    pub fn latest(&self) -> u64 {
        self.current
    }
}
