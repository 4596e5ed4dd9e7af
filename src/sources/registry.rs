use crate::config::Config;
use crate::domain::Platform;
use crate::errors::{AggregatorError, AggregatorResult};
use crate::sources::traits::FeedSource;
use crate::sources::{platform::PlatformSource, rss::RssSource};

/// Ordered list of the sources fetched during a run.
pub struct SourceRegistry {
    sources: Vec<Box<dyn FeedSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Build the sources enabled in `config`, in platform order with RSS
    /// feeds last in the order their URLs are listed
    pub fn from_config(config: &Config) -> AggregatorResult<Self> {
        let mut registry = Self::new();

        for platform in config.enabled_platforms() {
            match platform {
                Platform::Rss => {
                    for url in &config.feeds.rss.urls {
                        registry.register(Box::new(RssSource::new(url)));
                    }
                }
                _ => registry.register(Box::new(PlatformSource::from_env(platform))),
            }
        }

        if registry.is_empty() {
            return Err(AggregatorError::Config(
                "no sources enabled, enable at least one platform or RSS URL".to_string(),
            ));
        }

        Ok(registry)
    }

    pub fn register(&mut self, source: Box<dyn FeedSource>) {
        self.sources.push(source);
    }

    pub fn sources(&self) -> &[Box<dyn FeedSource>] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
