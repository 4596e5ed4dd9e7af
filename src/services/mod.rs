pub mod aggregator;
pub mod materializer;
pub mod paginator;
pub mod run_service;

pub use aggregator::{aggregate, apply_limit, partition_by_origin, sort_by_recency, Aggregation};
pub use materializer::{slugify, Materializer, OutputSettings};
pub use paginator::{paginate, Layout};
pub use run_service::RunService;
