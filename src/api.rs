//! Portal API client.
//!
//! Typed access to the three backend endpoints:
//!
//! - `GET  {base}/api/kids?grandparent={email}`
//! - `GET  {base}/api/kids/{id}/timeline?grandparent={email}&include_private={bool}`
//! - `POST {base}/api/seed`
//!
//! Responses are validated here. A non-2xx status becomes
//! [`FetchError::Http`], a transport failure [`FetchError::NetworkFailure`],
//! and a body that does not decode into the expected entity
//! [`FetchError::Malformed`].

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{FetchError, Operation};
use crate::models::{Kid, KidId, Timeline, TimelinePayload, Viewer};
use crate::traits::{HttpClient, Response};

/// Client for the portal backend.
#[derive(Clone)]
pub struct PortalApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl PortalApi {
    /// Create a client for `base_url`. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn kids_url(&self, viewer: &Viewer) -> String {
        format!(
            "{}/api/kids?grandparent={}",
            self.base_url,
            urlencoding::encode(&viewer.email)
        )
    }

    pub fn timeline_url(&self, kid_id: &KidId, viewer: &Viewer, include_private: bool) -> String {
        format!(
            "{}/api/kids/{}/timeline?grandparent={}&include_private={}",
            self.base_url,
            urlencoding::encode(kid_id.as_str()),
            urlencoding::encode(&viewer.email),
            include_private
        )
    }

    pub fn seed_url(&self) -> String {
        format!("{}/api/seed", self.base_url)
    }

    /// Fetch the kids `viewer` may see, in server order.
    pub async fn fetch_kids(&self, viewer: &Viewer) -> Result<Vec<Kid>, FetchError> {
        let url = self.kids_url(viewer);
        tracing::debug!(viewer = %viewer, url = %url, "GET kids");

        let response = self.get(Operation::Kids, &url).await?;
        decode(Operation::Kids, &response)
    }

    /// Fetch `kid_id`'s timeline as seen by `viewer`.
    pub async fn fetch_timeline(
        &self,
        kid_id: &KidId,
        viewer: &Viewer,
        include_private: bool,
    ) -> Result<Timeline, FetchError> {
        let url = self.timeline_url(kid_id, viewer, include_private);
        tracing::debug!(kid_id = %kid_id, viewer = %viewer, include_private, "GET timeline");

        let response = self.get(Operation::Timeline, &url).await?;
        let payload: TimelinePayload = decode(Operation::Timeline, &response)?;
        payload
            .into_timeline(kid_id)
            .map_err(|message| FetchError::malformed(Operation::Timeline, message))
    }

    /// Ask the backend to (re)create its demo data. The body is ignored.
    pub async fn seed(&self) -> Result<(), FetchError> {
        let url = self.seed_url();
        tracing::debug!(url = %url, "POST seed");

        let response = self
            .http
            .post_empty(&url)
            .await
            .map_err(|e| FetchError::network(Operation::Seed, e))?;
        Self::ensure_success(Operation::Seed, response).map(|_| ())
    }

    async fn get(&self, operation: Operation, url: &str) -> Result<Response, FetchError> {
        let response = self
            .http
            .get_json(url)
            .await
            .map_err(|e| FetchError::network(operation, e))?;
        Self::ensure_success(operation, response)
    }

    fn ensure_success(operation: Operation, response: Response) -> Result<Response, FetchError> {
        if response.is_success() {
            Ok(response)
        } else {
            Err(FetchError::http(operation, response.status))
        }
    }
}

fn decode<T: DeserializeOwned>(operation: Operation, response: &Response) -> Result<T, FetchError> {
    response.json::<T>().map_err(|e| {
        tracing::warn!(
            operation = %operation,
            error = %e,
            body = %response.body_preview(),
            "undecodable response"
        );
        FetchError::malformed(operation, e.to_string())
    })
}

impl std::fmt::Debug for PortalApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
