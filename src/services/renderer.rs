//! Trait and types for turning a narrative into a report document.

use std::path::Path;

use crate::analyzers::label::SentimentLabel;
use crate::analyzers::types::AggregateResult;
use crate::error::Result;

/// Everything that ends up on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub ticker: String,
    pub narrative: String,
    pub average_score: f64,
    pub label: SentimentLabel,
}

impl ReportDocument {
    pub fn from_result(result: &AggregateResult, narrative: String) -> Self {
        Self {
            ticker: result.ticker.clone(),
            narrative,
            average_score: result.average_score,
            label: result.label,
        }
    }
}

/// Writes a [`ReportDocument`] to `path`.
pub trait DocumentRenderer {
    fn render(&self, document: &ReportDocument, path: &Path) -> Result<()>;
}
