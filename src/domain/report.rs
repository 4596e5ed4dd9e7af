use super::RunMetadata;

/// A source that could not be fetched during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub origin: String,
    pub message: String,
}

impl std::fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.origin, self.message)
    }
}

/// Outcome of a completed run: the metadata that was written and every
/// non-fatal problem encountered along the way.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub metadata: RunMetadata,
    pub warnings: Vec<String>,
}
