pub mod item;
pub mod metadata;
pub mod page;
pub mod platform;
pub mod report;

pub use item::FeedItem;
pub use metadata::RunMetadata;
pub use page::{page_file_name, single_file_name, Page};
pub use platform::Platform;
pub use report::{RunSummary, SourceFailure};
