use serde::{Deserialize, Deserializer};
use std::fmt;

use super::deserialize_id;

/// Identifier of a child profile, normalized to a string whether the backend
/// sends it as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KidId(String);

impl KidId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KidId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for KidId {
    fn from(value: u64) -> Self {
        Self::new(value.to_string())
    }
}

impl<'de> Deserialize<'de> for KidId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_id(deserializer).map(KidId)
    }
}

/// A child profile visible to the requesting viewer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Kid {
    pub id: KidId,
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Emails of the viewers allowed to see this kid. Only the count is shown.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub allowed_grandparents: Vec<String>,
}

impl Kid {
    pub fn new(id: impl Into<KidId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nickname: None,
            avatar_url: None,
            allowed_grandparents: Vec::new(),
        }
    }

    pub fn allowed_viewer_count(&self) -> usize {
        self.allowed_grandparents.len()
    }

    /// `"Mia (Mimi)"` when a nickname is set, otherwise just the name.
    pub fn display_name(&self) -> String {
        match self.nickname.as_deref().filter(|n| !n.is_empty()) {
            Some(nickname) => format!("{} ({})", self.name, nickname),
            None => self.name.clone(),
        }
    }
}

/// A list the backend may send as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Label for the roster size: "No kids", "1 kid", "3 kids".
pub fn kid_count_label(count: usize) -> String {
    match count {
        0 => "No kids".to_string(),
        1 => "1 kid".to_string(),
        n => format!("{} kids", n),
    }
}
