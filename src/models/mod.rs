//! Wire entities returned by the portal backend.
//!
//! All payloads are decoded into these types at the API boundary. Anything
//! that does not fit (missing fields, wrong types, an unknown visibility) is
//! rejected as malformed instead of reaching the view half-typed.

mod kid;
mod moment;
mod timeline;

pub use kid::{kid_count_label, Kid, KidId};
pub use moment::{Moment, MomentType, Visibility};
pub use timeline::Timeline;
pub(crate) use timeline::TimelinePayload;

use serde::Deserializer;

/// Viewer email used when nothing else is configured.
pub const DEFAULT_VIEWER_EMAIL: &str = "grandma@family.demo";

/// The identity under which all requests are authorized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Viewer {
    pub email: String,
}

impl Viewer {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl std::fmt::Display for Viewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.email)
    }
}

/// Deserialize an identifier that the backend may send as a string or an integer.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Same as [`deserialize_id`] for an optional field.
pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "deserialize_id")] String);

    let wrapped: Option<Wrapper> = serde::Deserialize::deserialize(deserializer)?;
    Ok(wrapped.map(|Wrapper(id)| id))
}
