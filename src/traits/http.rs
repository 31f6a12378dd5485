//! HTTP transport seam.
//!
//! The portal only ever issues two kinds of request: a JSON `GET` and a
//! body-less `POST`. [`HttpClient`] exposes exactly those, so the reqwest
//! adapter and the test mock stay small.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// How much of a body to show in logs.
const PREVIEW_LEN: usize = 200;

/// Status and body of a completed request. Any status counts as completed.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Lossy UTF-8 head of the body for log lines.
    pub fn body_preview(&self) -> String {
        let text = String::from_utf8_lossy(&self.body);
        match text.char_indices().nth(PREVIEW_LEN) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.into_owned(),
        }
    }
}

/// The request never produced a status code.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HttpError {
    #[error("could not connect: {0}")]
    Connect(String),
    #[error("timed out: {0}")]
    Timeout(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("failed reading body: {0}")]
    Body(String),
    #[error("{0}")]
    Other(String),
}

/// Transport used by [`crate::api::PortalApi`].
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// `GET url` asking for `application/json`.
    async fn get_json(&self, url: &str) -> Result<Response, HttpError>;

    /// `POST url` with an empty body.
    async fn post_empty(&self, url: &str) -> Result<Response, HttpError>;
}
