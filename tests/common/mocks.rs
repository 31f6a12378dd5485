//! Mock backend configuration for integration tests.

pub use littleyears::adapters::{MockHttpClient, MockResponse};
pub use littleyears::traits::HttpError;

use serde_json::Value;

use super::{kids_url, seed_url, timeline_url};

/// Fluent setup of a mock portal backend.
pub struct MockPortal {
    client: MockHttpClient,
}

impl MockPortal {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    pub fn with_kids(self, viewer: &str, kids: Value) -> Self {
        self.client.set_response(&kids_url(viewer), MockResponse::json(kids));
        self
    }

    pub fn with_timeline(
        self,
        kid_id: u64,
        viewer: &str,
        include_private: bool,
        body: Value,
    ) -> Self {
        self.client.set_response(
            &timeline_url(kid_id, viewer, include_private),
            MockResponse::json(body),
        );
        self
    }

    pub fn with_seed_status(self, status: u16) -> Self {
        self.client.set_response(&seed_url(), MockResponse::status(status));
        self
    }

    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.client.set_response(url, MockResponse::status(status));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}
