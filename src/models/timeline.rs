use serde::Deserialize;

use super::{deserialize_optional_id, KidId, Moment};

/// A kid's moments as filtered by the server for one viewer and privacy request.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub kid_id: KidId,
    /// The server's statement of whether private moments were included.
    /// Independent of what the client asked for.
    pub includes_private: bool,
    pub moments: Vec<Moment>,
}

impl Timeline {
    pub fn private_count(&self) -> usize {
        self.moments.iter().filter(|m| m.is_private()).count()
    }
}

/// Timeline as it appears on the wire. `kid_id` is optional there.
#[derive(Debug, Deserialize)]
pub(crate) struct TimelinePayload {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    kid_id: Option<String>,
    includes_private: bool,
    moments: Vec<Moment>,
}

impl TimelinePayload {
    /// Bind the payload to the kid it was requested for. A payload that names
    /// a different kid is rejected.
    pub(crate) fn into_timeline(self, requested: &KidId) -> Result<Timeline, String> {
        if let Some(kid_id) = self.kid_id {
            if kid_id != requested.as_str() {
                return Err(format!(
                    "timeline is for kid {} but kid {} was requested",
                    kid_id, requested
                ));
            }
        }

        Ok(Timeline {
            kid_id: requested.clone(),
            includes_private: self.includes_private,
            moments: self.moments,
        })
    }
}
