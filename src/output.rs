//! Logging and persistence of aggregated results.
//!
//! Supports pretty-printing, JSON serialization, and a CSV run history.

use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::{debug, info};

use crate::analyzers::label::SentimentLabel;
use crate::analyzers::types::AggregateResult;
use crate::error::Result;

/// One row of the run-history CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    pub timestamp: DateTime<Utc>,
    pub ticker: String,
    pub average_score: f64,
    pub label: SentimentLabel,
    pub article_count: usize,
    pub report_path: String,
}

impl RunRecord {
    pub fn new(result: &AggregateResult, report_path: &Path) -> Self {
        Self {
            timestamp: Utc::now(),
            ticker: result.ticker.clone(),
            average_score: result.average_score,
            label: result.label,
            article_count: result.article_count,
            report_path: report_path.display().to_string(),
        }
    }
}

/// Logs an aggregate using Rust's debug pretty-print format.
pub fn print_pretty(result: &AggregateResult) {
    debug!("{:#?}", result);
}

/// Logs an aggregate as pretty-printed JSON.
pub fn print_json(result: &AggregateResult) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Appends a [`RunRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &Path, record: &RunRecord) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending run record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}
