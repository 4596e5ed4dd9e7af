use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::domain::Platform;
use crate::errors::{AggregatorError, AggregatorResult};

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feeds: FeedsConfig,
    /// Maximum number of items in the output, 0 for unlimited
    pub output_limit: usize,
    /// Items per page, values of 1 or less disable pagination
    pub page_size: i64,
    pub generate_individual_items: bool,
    pub generate_platform_feeds: bool,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feeds: FeedsConfig::default(),
            output_limit: 0,
            page_size: 0,
            generate_individual_items: false,
            generate_platform_feeds: false,
            output_dir: PathBuf::from("output"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedsConfig {
    pub linkedin: PlatformConfig,
    pub threads: PlatformConfig,
    pub x: PlatformConfig,
    pub instagram: PlatformConfig,
    pub reddit: PlatformConfig,
    pub strava: PlatformConfig,
    pub goodreads: PlatformConfig,
    pub credly: PlatformConfig,
    pub rss: RssConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RssConfig {
    pub enabled: bool,
    pub urls: Vec<String>,
}

impl FeedsConfig {
    pub fn is_enabled(&self, platform: Platform) -> bool {
        match platform {
            Platform::LinkedIn => self.linkedin.enabled,
            Platform::Threads => self.threads.enabled,
            Platform::X => self.x.enabled,
            Platform::Instagram => self.instagram.enabled,
            Platform::Reddit => self.reddit.enabled,
            Platform::Strava => self.strava.enabled,
            Platform::Goodreads => self.goodreads.enabled,
            Platform::Credly => self.credly.enabled,
            Platform::Rss => self.rss.enabled,
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Load `.env` so platform credentials are visible as environment variables
    pub fn load_env() {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();
    }

    pub fn from_toml(content: &str) -> AggregatorResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> AggregatorResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AggregatorError::Config(format!("cannot read {}: {}", path.as_ref().display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Load `path`, falling back to `path.example` when the file cannot be read
    pub fn load_or_example<P: AsRef<Path>>(path: P) -> AggregatorResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        let mut example = path.as_os_str().to_owned();
        example.push(".example");
        let example = PathBuf::from(example);

        warn!(
            "Could not find {}, falling back to {}",
            path.display(),
            example.display()
        );
        Self::load(&example)
    }

    fn validate(&self) -> AggregatorResult<()> {
        if self.feeds.rss.enabled {
            if self.feeds.rss.urls.is_empty() {
                warn!("RSS is enabled but no URLs are configured");
            }
            for url in &self.feeds.rss.urls {
                Url::parse(url)
                    .map_err(|e| AggregatorError::InvalidUrl(format!("{}: {}", url, e)))?;
            }
        }
        Ok(())
    }

    pub fn enabled_platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| self.feeds.is_enabled(*p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
output_limit = 50
page_size = 10
generate_individual_items = true

[feeds.linkedin]
enabled = true

[feeds.threads]
enabled = false

[feeds.rss]
enabled = true
urls = ["http://example.com/feed1.xml", "http://example.com/feed2.xml"]
"#;

    #[test]
    fn test_parse_sample() {
        let config = Config::from_toml(SAMPLE).unwrap();

        assert!(config.feeds.linkedin.enabled);
        assert!(!config.feeds.threads.enabled);
        assert!(config.feeds.rss.enabled);
        assert_eq!(config.feeds.rss.urls.len(), 2);
        assert_eq!(config.feeds.rss.urls[0], "http://example.com/feed1.xml");
        assert_eq!(config.output_limit, 50);
        assert_eq!(config.page_size, 10);
        assert!(config.generate_individual_items);
        assert!(!config.generate_platform_feeds);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_enabled_platforms_in_fetch_order() {
        let config = Config::from_toml(SAMPLE).unwrap();
        assert_eq!(
            config.enabled_platforms(),
            vec![Platform::LinkedIn, Platform::Rss]
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.output_limit, 0);
        assert_eq!(config.page_size, 0);
        assert!(config.enabled_platforms().is_empty());
    }

    #[test]
    fn test_negative_page_size_is_accepted() {
        let content = "page_size = -1\n[feeds.strava]\nenabled = true\n";
        let config = Config::from_toml(content).unwrap();
        assert_eq!(config.page_size, -1);
        assert_eq!(config.enabled_platforms(), vec![Platform::Strava]);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml("feeds = [not toml");
        assert!(matches!(result, Err(AggregatorError::ConfigParse(_))));
    }

    #[test]
    fn test_invalid_rss_url() {
        let content = "[feeds.rss]\nenabled = true\nurls = [\"not a url\"]\n";
        let result = Config::from_toml(content);
        assert!(matches!(result, Err(AggregatorError::InvalidUrl(_))));
    }

    #[test]
    fn test_file_not_found() {
        let result = Config::load("non_existent_file.toml");
        assert!(matches!(result, Err(AggregatorError::Config(_))));
    }

    #[test]
    fn test_falls_back_to_example() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(dir.path().join("config.toml.example"), SAMPLE).unwrap();

        let config = Config::load_or_example(&path).unwrap();
        assert_eq!(config.page_size, 10);
    }
}
