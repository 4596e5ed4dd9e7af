pub mod platform;
pub mod registry;
pub mod rss;
pub mod traits;

pub use platform::PlatformSource;
pub use registry::SourceRegistry;
pub use rss::RssSource;
pub use traits::FeedSource;
