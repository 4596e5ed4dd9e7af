use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::domain::{FeedItem, SourceFailure};
use crate::sources::FeedSource;

/// Items collected from every source plus the sources that failed.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub items: Vec<FeedItem>,
    pub failures: Vec<SourceFailure>,
}

/// Fetch every source in order. A failing source contributes no items and is
/// recorded in `failures`; it never stops the other sources.
pub fn aggregate(sources: &[Box<dyn FeedSource>]) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for source in sources {
        let origin = source.origin();
        info!("Fetching {} feed...", source.describe());

        match source.fetch() {
            Ok(items) => {
                let fetched = items.len();
                let before = aggregation.items.len();
                aggregation
                    .items
                    .extend(items.into_iter().filter_map(|item| normalize(item, &origin)));

                let kept = aggregation.items.len() - before;
                if kept < fetched {
                    warn!(
                        "Dropped {} items without a link from {}",
                        fetched - kept,
                        source.describe()
                    );
                }
                info!("Fetched {} items from {}", kept, source.describe());
            }
            Err(e) => {
                warn!("Error fetching {}: {}", source.describe(), e);
                aggregation.failures.push(SourceFailure {
                    origin: source.describe(),
                    message: e.to_string(),
                });
            }
        }
    }

    aggregation
}

/// Tag the item with its origin when the source left it blank; items without
/// a canonical link cannot be normalized and are dropped.
fn normalize(mut item: FeedItem, origin: &str) -> Option<FeedItem> {
    if item.platform.trim().is_empty() {
        item.platform = origin.to_string();
    }
    if item.profile_link.trim().is_empty() {
        return None;
    }
    Some(item)
}

/// Most recent first. `sort_by` is stable, so equal timestamps keep their
/// aggregation order.
pub fn sort_by_recency(mut items: Vec<FeedItem>) -> Vec<FeedItem> {
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items
}

/// Keep the first `limit` items; a limit of 0 keeps everything
pub fn apply_limit(mut items: Vec<FeedItem>, limit: usize) -> Vec<FeedItem> {
    if limit > 0 && items.len() > limit {
        info!(
            "Applying output limit: truncating {} items to {}",
            items.len(),
            limit
        );
        items.truncate(limit);
    }
    items
}

/// Group items by origin, keeping each group in input order
pub fn partition_by_origin(items: &[FeedItem]) -> BTreeMap<String, Vec<FeedItem>> {
    let mut groups: BTreeMap<String, Vec<FeedItem>> = BTreeMap::new();
    for item in items {
        groups
            .entry(item.platform.clone())
            .or_default()
            .push(item.clone());
    }
    groups
}
