use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{page_file_name, single_file_name, FeedItem, RunMetadata, RunSummary};
use crate::errors::AggregatorResult;
use crate::services::aggregator::partition_by_origin;
use crate::services::paginator::{paginate, Layout};
use crate::storage::OutputStore;

pub const ITEMS_DIR: &str = "items";
pub const PLATFORMS_DIR: &str = "platforms";
pub const MAIN_FEED_NAMESPACE: &str = "feed";
pub const METADATA_LOCATION: &str = "meta.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputSettings {
    pub page_size: usize,
    pub generate_individual_items: bool,
    pub generate_platform_feeds: bool,
}

impl OutputSettings {
    /// Negative page sizes from the config disable pagination like 0 and 1 do
    pub fn from_config(config: &Config) -> Self {
        Self {
            page_size: usize::try_from(config.page_size).unwrap_or(0),
            generate_individual_items: config.generate_individual_items,
            generate_platform_feeds: config.generate_platform_feeds,
        }
    }
}

/// URL-safe lowercase form of an origin, e.g. `Hacker News` -> `hacker-news`
pub fn slugify(origin: &str) -> String {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let separators = SEPARATORS.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap());

    let lowered = origin.to_lowercase();
    let slug = separators.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        "source".to_string()
    } else {
        slug.to_string()
    }
}

/// Slug of `origin` that is not yet in `taken`. Origins that only differ in
/// case or punctuation get a numeric suffix, e.g. `x`, `x-2`.
fn unique_slug(origin: &str, taken: &mut BTreeSet<String>) -> String {
    let base = slugify(origin);
    let mut slug = base.clone();
    let mut n = 2;
    while !taken.insert(slug.clone()) {
        slug = format!("{}-{}", base, n);
        n += 1;
    }
    slug
}

/// Writes the feed files of a run to an output store.
///
/// Individual item and platform files are best effort: a failure is logged,
/// recorded as a warning and that file is skipped. The main feed and the
/// metadata file are required, so their failures abort the run.
pub struct Materializer<S: OutputStore> {
    store: S,
    settings: OutputSettings,
}

impl<S: OutputStore> Materializer<S> {
    pub fn new(store: S, settings: OutputSettings) -> Self {
        Self { store, settings }
    }

    pub fn materialize(&self, mut items: Vec<FeedItem>) -> AggregatorResult<RunSummary> {
        let mut metadata = RunMetadata::new(items.len());
        let mut warnings = Vec::new();

        // Permalinks must be assigned before any feed serializes the items
        if self.settings.generate_individual_items {
            self.write_individual_items(&mut items, &mut warnings);
            metadata.individual_items = Some(format!("{}/", ITEMS_DIR));
        }

        if self.settings.generate_platform_feeds {
            metadata.platform_feeds = Some(self.write_platform_feeds(&items, &mut warnings));
        }

        self.write_main_feed(&items, &mut metadata)?;

        self.write_json(METADATA_LOCATION, &metadata)?;
        info!("Successfully generated metadata to {}", METADATA_LOCATION);

        Ok(RunSummary { metadata, warnings })
    }

    fn write_json<T: Serialize + ?Sized>(&self, location: &str, value: &T) -> AggregatorResult<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.store.write(location, &bytes)
    }

    fn write_individual_items(&self, items: &mut [FeedItem], warnings: &mut Vec<String>) {
        info!("Generating individual item files...");
        let mut written = 0;

        for (index, item) in items.iter_mut().enumerate() {
            let location = format!("{}/{}.json", ITEMS_DIR, item.file_id(index));
            item.permalink = Some(location.clone());

            match self.write_json(&location, &*item) {
                Ok(()) => written += 1,
                Err(e) => {
                    warn!("Skipping individual item {}: {}", location, e);
                    warnings.push(format!("individual item {}: {}", location, e));
                    item.permalink = None;
                }
            }
        }

        info!("Generated {} individual item files", written);
    }

    /// Returns origin -> location of the first page written for that origin
    fn write_platform_feeds(
        &self,
        items: &[FeedItem],
        warnings: &mut Vec<String>,
    ) -> BTreeMap<String, String> {
        info!("Generating platform-specific feeds...");
        let mut first_pages = BTreeMap::new();
        let mut slugs = BTreeSet::new();

        for (origin, group) in partition_by_origin(items) {
            info!(
                "Generating feed for platform: {} with {} items",
                origin,
                group.len()
            );
            let slug = unique_slug(&origin, &mut slugs);

            match paginate(&group, self.settings.page_size, &slug) {
                Layout::Paged(pages) => {
                    for page in &pages {
                        let file_name = page_file_name(&slug, page.current_page);
                        let location = format!("{}/{}", PLATFORMS_DIR, file_name);

                        match self.write_json(&location, page) {
                            Ok(()) if page.is_first() => {
                                first_pages.insert(origin.clone(), location);
                            }
                            Ok(()) => {}
                            Err(e) => {
                                warn!(
                                    "Skipping page {} of platform {}: {}",
                                    page.current_page, origin, e
                                );
                                warnings.push(format!("platform feed {}: {}", location, e));
                            }
                        }
                    }
                }
                Layout::Single(group) => {
                    let location = format!("{}/{}", PLATFORMS_DIR, single_file_name(&slug));

                    match self.write_json(&location, &group) {
                        Ok(()) => {
                            first_pages.insert(origin, location);
                        }
                        Err(e) => {
                            warn!("Skipping feed of platform {}: {}", origin, e);
                            warnings.push(format!("platform feed {}: {}", location, e));
                        }
                    }
                }
            }
        }

        info!("Finished generating platform-specific feeds");
        first_pages
    }

    fn write_main_feed(
        &self,
        items: &[FeedItem],
        metadata: &mut RunMetadata,
    ) -> AggregatorResult<()> {
        info!("Generating main aggregated feed...");

        match paginate(items, self.settings.page_size, MAIN_FEED_NAMESPACE) {
            Layout::Paged(pages) => {
                metadata.total_pages = Some(pages.len());
                for page in &pages {
                    let location = page_file_name(MAIN_FEED_NAMESPACE, page.current_page);
                    self.write_json(&location, page)?;
                    metadata.main_feed_pages.push(location);
                }
                info!(
                    "Successfully aggregated {} feed items into {} paginated files",
                    items.len(),
                    pages.len()
                );
            }
            Layout::Single(items) => {
                let location = single_file_name(MAIN_FEED_NAMESPACE);
                self.write_json(&location, &items)?;
                info!(
                    "Successfully aggregated {} feed items to {}",
                    items.len(),
                    location
                );
                metadata.main_feed_pages.push(location);
            }
        }

        Ok(())
    }
}
