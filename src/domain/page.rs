use serde::{Deserialize, Serialize};

use super::FeedItem;

/// One page of a paginated feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<FeedItem>,
    pub current_page: usize,
    pub total_pages: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
}

impl Page {
    pub fn is_first(&self) -> bool {
        self.current_page == 1
    }
}

/// File name of page `number` (1-based) within `namespace`, e.g. `feed_page_2.json`
pub fn page_file_name(namespace: &str, number: usize) -> String {
    format!("{}_page_{}.json", namespace, number)
}

/// File name used for a feed written as a single unpaginated unit
pub fn single_file_name(namespace: &str) -> String {
    format!("{}.json", namespace)
}
