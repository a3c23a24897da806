//! Trait for the text generator that writes the report body.

use crate::analyzers::types::AggregateResult;
use crate::error::Result;

/// Produces the plain-text narrative for an aggregated sentiment result.
///
/// Implementations return [`ReportError::Narrative`](crate::error::ReportError::Narrative)
/// when no text could be produced.
#[async_trait::async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, result: &AggregateResult) -> Result<String>;
}
