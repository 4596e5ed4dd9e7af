use crate::errors::AggregatorResult;

/// Destination for generated feed files. Locations are `/`-separated paths
/// relative to the output root.
#[cfg_attr(test, mockall::automock)]
pub trait OutputStore: Send + Sync {
    fn write(&self, location: &str, contents: &[u8]) -> AggregatorResult<()>;
}
