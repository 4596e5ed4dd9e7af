use crate::domain::FeedItem;
use crate::errors::AggregatorResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedSource: Send + Sync {
    /// Origin tag attached to every item this source produces
    fn origin(&self) -> String;

    /// Human readable label used in logs, e.g. the RSS URL
    fn describe(&self) -> String {
        self.origin()
    }

    /// Fetch all currently available items, normalized
    fn fetch(&self) -> AggregatorResult<Vec<FeedItem>>;
}
