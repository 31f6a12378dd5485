//! Scripted [`HttpClient`] for tests.
//!
//! Responses are keyed by exact URL, query string included. Every request is
//! recorded so tests can assert which endpoints were hit and in what order.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, Response};

/// A request seen by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
}

/// What the mock answers for a URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A completed request with any status.
    Reply(Response),
    /// A transport failure.
    Error(HttpError),
}

impl MockResponse {
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Reply(Response::new(200, value.to_string()))
    }

    pub fn status(status: u16) -> Self {
        MockResponse::Reply(Response::new(status, Bytes::new()))
    }

    /// 200 with a body that is not necessarily JSON.
    pub fn raw(body: &str) -> Self {
        MockResponse::Reply(Response::new(200, body.to_string()))
    }
}

#[derive(Debug, Default)]
struct Script {
    responses: HashMap<String, MockResponse>,
    fallback: Option<MockResponse>,
    requests: Vec<RecordedRequest>,
}

/// Clones share the same script and request log.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://portal.test/api/kids?grandparent=grandma%40family.demo",
///     MockResponse::json(serde_json::json!([{"id": 1, "name": "Mia"}])),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.lock().responses.insert(url.to_string(), response);
    }

    /// Answer for URLs without a specific response.
    pub fn set_default_response(&self, response: MockResponse) {
        self.lock().fallback = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.lock().requests.iter().map(|r| r.url.clone()).collect()
    }

    pub fn clear_requests(&self) {
        self.lock().requests.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        // A test that panicked mid-request poisons the lock; the log is still usable.
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn answer(&self, method: &'static str, url: &str) -> Result<Response, HttpError> {
        let mut script = self.lock();
        script.requests.push(RecordedRequest {
            method,
            url: url.to_string(),
        });

        match script.responses.get(url).or(script.fallback.as_ref()) {
            Some(MockResponse::Reply(response)) => Ok(response.clone()),
            Some(MockResponse::Error(err)) => Err(err.clone()),
            None => Err(HttpError::Other(format!("no mock response for {}", url))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get_json(&self, url: &str) -> Result<Response, HttpError> {
        self.answer("GET", url)
    }

    async fn post_empty(&self, url: &str) -> Result<Response, HttpError> {
        self.answer("POST", url)
    }
}
