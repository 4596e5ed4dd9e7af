use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post or feed entry normalized to a common shape, whatever source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub platform: String,
    pub post_content: String,
    pub username: String,
    pub media_url: Option<String>,
    pub profile_link: String,
    pub timestamp: DateTime<Utc>,
    pub interactions: u64,
    /// Location of the item's own JSON file, set only when individual items are written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

impl FeedItem {
    pub fn new(
        platform: &str,
        post_content: String,
        username: String,
        profile_link: String,
    ) -> Self {
        Self {
            platform: platform.to_string(),
            post_content,
            username,
            media_url: None,
            profile_link,
            timestamp: Utc::now(),
            interactions: 0,
            permalink: None,
        }
    }

    pub fn with_media_url(mut self, media_url: Option<String>) -> Self {
        self.media_url = media_url;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_interactions(mut self, interactions: u64) -> Self {
        self.interactions = interactions;
        self
    }

    /// File identifier for the individual item file: fixed-width timestamp plus
    /// the item's position, so identical timestamps still get distinct names.
    pub fn file_id(&self, index: usize) -> String {
        format!("{}_{}", self.timestamp.format("%Y%m%d%H%M%S"), index)
    }
}
