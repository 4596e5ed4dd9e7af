use tracing::info;

use crate::domain::RunSummary;
use crate::errors::AggregatorResult;
use crate::services::aggregator::{aggregate, apply_limit, sort_by_recency};
use crate::services::materializer::{Materializer, OutputSettings};
use crate::sources::SourceRegistry;
use crate::storage::OutputStore;

/// Runs the whole pipeline once: fetch, sort, limit, then write.
pub struct RunService<S: OutputStore> {
    source_registry: SourceRegistry,
    materializer: Materializer<S>,
    output_limit: usize,
}

impl<S: OutputStore> RunService<S> {
    pub fn new(
        source_registry: SourceRegistry,
        store: S,
        settings: OutputSettings,
        output_limit: usize,
    ) -> Self {
        Self {
            source_registry,
            materializer: Materializer::new(store, settings),
            output_limit,
        }
    }

    pub fn run(&self) -> AggregatorResult<RunSummary> {
        let aggregation = aggregate(self.source_registry.sources());
        info!(
            "Collected {} items from {} sources ({} failed)",
            aggregation.items.len(),
            self.source_registry.len(),
            aggregation.failures.len()
        );

        let items = apply_limit(sort_by_recency(aggregation.items), self.output_limit);

        let mut summary = self.materializer.materialize(items)?;

        let mut warnings: Vec<String> = aggregation
            .failures
            .iter()
            .map(|failure| format!("source {}", failure))
            .collect();
        warnings.append(&mut summary.warnings);
        summary.warnings = warnings;

        Ok(summary)
    }
}
