//! Fetch error taxonomy for portal requests.
//!
//! Every request the client makes ends in one of three failure kinds:
//!
//! | Kind | Meaning |
//! |------|---------|
//! | `NetworkFailure` | The request did not complete (transport-level) |
//! | `Http { status }` | A response arrived with a non-2xx status |
//! | `Malformed` | The body did not match the expected entity schema |
//!
//! None of them are retried automatically. Recovery is always a deliberate
//! user action (apply, refresh, toggle).

use std::fmt;

use thiserror::Error;

use crate::traits::HttpError;

/// The request a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `GET /api/kids`
    Kids,
    /// `GET /api/kids/{id}/timeline`
    Timeline,
    /// `POST /api/seed`
    Seed,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Kids => write!(f, "kids"),
            Operation::Timeline => write!(f, "timeline"),
            Operation::Seed => write!(f, "seed"),
        }
    }
}

/// Classification of a failed fetch, without the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkFailure,
    Http { status: u16 },
    Malformed,
}

/// A failed portal request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// Transport-level failure, no response was received.
    #[error("{operation} request did not complete: {message}")]
    NetworkFailure { operation: Operation, message: String },

    /// The server answered with a non-2xx status.
    #[error("{operation} request returned HTTP {status}")]
    Http { operation: Operation, status: u16 },

    /// The body could not be decoded into the expected entity.
    #[error("{operation} response was malformed: {message}")]
    Malformed { operation: Operation, message: String },
}

impl FetchError {
    /// Wrap a transport error from the HTTP layer.
    pub fn network(operation: Operation, err: HttpError) -> Self {
        FetchError::NetworkFailure {
            operation,
            message: err.to_string(),
        }
    }

    pub fn http(operation: Operation, status: u16) -> Self {
        FetchError::Http { operation, status }
    }

    pub fn malformed(operation: Operation, message: impl Into<String>) -> Self {
        FetchError::Malformed {
            operation,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::NetworkFailure { .. } => ErrorKind::NetworkFailure,
            FetchError::Http { status, .. } => ErrorKind::Http { status: *status },
            FetchError::Malformed { .. } => ErrorKind::Malformed,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            FetchError::NetworkFailure { operation, .. }
            | FetchError::Http { operation, .. }
            | FetchError::Malformed { operation, .. } => *operation,
        }
    }

    /// Short error code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NetworkFailure => "network_failure",
            ErrorKind::Http { .. } => "http_status",
            ErrorKind::Malformed => "malformed_response",
        }
    }

    /// Text for the single error banner shown to the viewer.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Http {
                operation: Operation::Kids,
                status,
            } => format!("Failed to load kids ({})", status),
            FetchError::Http {
                operation: Operation::Timeline,
                status,
            } => format!("Failed to load timeline ({})", status),
            FetchError::Http {
                operation: Operation::Seed,
                status,
            } => format!("Seeding failed ({})", status),
            FetchError::NetworkFailure { operation, .. } => match operation {
                Operation::Seed => "Seeding failed: could not reach the portal backend".to_string(),
                other => format!("Could not reach the portal backend while loading {}", other),
            },
            FetchError::Malformed { operation, .. } => match operation {
                Operation::Seed => "Seeding failed: unexpected response".to_string(),
                other => format!("Unexpected response while loading {}", other),
            },
        }
    }
}
