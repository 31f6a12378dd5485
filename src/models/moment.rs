use serde::Deserialize;

use super::deserialize_id;

/// Kind of media a moment carries. Types the client does not know how to
/// preview are kept as `Other` and rendered as text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentType {
    Photo,
    Art,
    Audio,
    #[serde(other)]
    Other,
}

impl MomentType {
    pub fn label(&self) -> &'static str {
        match self {
            MomentType::Photo => "photo",
            MomentType::Art => "art",
            MomentType::Audio => "audio",
            MomentType::Other => "update",
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, MomentType::Photo | MomentType::Art)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn label(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

/// One media item or update in a kid's timeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Moment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MomentType,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub media_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub visibility: Visibility,
}

impl Moment {
    /// URL to preview: the thumbnail for images when present, else the media itself.
    pub fn preview_url(&self) -> &str {
        if self.kind.is_image() {
            self.thumbnail_url.as_deref().unwrap_or(&self.media_url)
        } else {
            &self.media_url
        }
    }

    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment_json(kind: &str, visibility: &str) -> serde_json::Value {
        serde_json::json!({
            "id": 10,
            "type": kind,
            "title": "First steps",
            "media_url": "https://media.example/10.jpg",
            "visibility": visibility
        })
    }

    #[test]
    fn test_moment_decodes() {
        let moment: Moment = serde_json::from_value(moment_json("photo", "public")).unwrap();
        assert_eq!(moment.id, "10");
        assert_eq!(moment.kind, MomentType::Photo);
        assert_eq!(moment.visibility, Visibility::Public);
        assert!(!moment.is_private());
        assert_eq!(moment.description, None);
    }

    #[test]
    fn test_unknown_type_is_other() {
        let moment: Moment = serde_json::from_value(moment_json("video", "private")).unwrap();
        assert_eq!(moment.kind, MomentType::Other);
        assert_eq!(moment.kind.label(), "update");
        assert!(moment.is_private());
    }

    #[test]
    fn test_unknown_visibility_is_rejected() {
        assert!(serde_json::from_value::<Moment>(moment_json("photo", "secret")).is_err());
    }

    #[test]
    fn test_missing_media_url_is_rejected() {
        let value = serde_json::json!({
            "id": 1, "type": "art", "title": "Drawing", "visibility": "public"
        });
        assert!(serde_json::from_value::<Moment>(value).is_err());
    }

    #[test]
    fn test_preview_url_prefers_thumbnail_for_images() {
        let mut moment: Moment = serde_json::from_value(moment_json("art", "public")).unwrap();
        assert_eq!(moment.preview_url(), "https://media.example/10.jpg");

        moment.thumbnail_url = Some("https://media.example/10-thumb.jpg".to_string());
        assert_eq!(moment.preview_url(), "https://media.example/10-thumb.jpg");

        moment.kind = MomentType::Audio;
        assert_eq!(moment.preview_url(), "https://media.example/10.jpg");
    }
}
