//! News posts as returned by the venue backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One media attachment on a news post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsMedia {
    /// Backend id of the attachment.
    #[serde(default)]
    pub id: Option<i64>,
    /// URL of the media file.
    #[serde(default)]
    pub file_url: String,
    /// Media type hint (e.g. "image", "video").
    #[serde(default)]
    pub file_type: Option<String>,
}

/// One news post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsPost {
    /// Stable unique identity.
    pub id: i64,
    /// Headline.
    #[serde(default)]
    pub title: String,
    /// Publication timestamp; feeds sort newest first.
    pub publish_date: DateTime<Utc>,
    /// Only public posts are ever shown.
    #[serde(default)]
    pub is_public: bool,
    /// Body content.
    #[serde(default)]
    pub content: String,
    /// Attached media.
    #[serde(default)]
    pub media: Vec<NewsMedia>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_post_with_media() {
        let post: NewsPost = serde_json::from_value(json!({
            "id": 4,
            "title": "New opening hours",
            "publish_date": "2025-06-01T09:00:00Z",
            "is_public": true,
            "content": "We now open earlier.",
            "media": [{ "id": 1, "file_url": "banner.jpg", "file_type": "image" }]
        }))
        .unwrap();
        assert_eq!(post.media.len(), 1);
        assert_eq!(post.media[0].file_url, "banner.jpg");
    }

    #[test]
    fn test_is_public_defaults_to_false() {
        let post: NewsPost = serde_json::from_value(json!({
            "id": 4,
            "publish_date": "2025-06-01T09:00:00Z"
        }))
        .unwrap();
        assert!(!post.is_public);
    }
}
