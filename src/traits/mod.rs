//! Seams between the portal client and the outside world.

pub mod http;

pub use http::{HttpClient, HttpError, Response};
