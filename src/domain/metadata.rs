use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Summary of the layout produced by one run, written to `meta.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub total_items: usize,
    /// Only present when the main feed is paginated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
    #[serde(default)]
    pub main_feed_pages: Vec<String>,
    /// Origin to first-page location, only present when platform feeds are enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_feeds: Option<BTreeMap<String, String>>,
    #[serde(
        default,
        rename = "individual_items_directory",
        skip_serializing_if = "Option::is_none"
    )]
    pub individual_items: Option<String>,
}

impl RunMetadata {
    pub fn new(total_items: usize) -> Self {
        Self {
            total_items,
            ..Self::default()
        }
    }
}
