//! The two report runs: live data and the bundled sample.
//!
//! Both are strictly sequential (fetch, aggregate, narrate, render) and stop at
//! the first error, so no report is ever rendered from incomplete data.

use tracing::{info, warn};

use crate::analyzers::assemble::assemble;
use crate::analyzers::types::AggregateResult;
use crate::config::Config;
use crate::error::Result;
use crate::infra::sample::{SAMPLE_TICKER, SampleNarrator, sample_result};
use crate::output::{RunRecord, append_record, print_json, print_pretty};
use crate::services::narrative::NarrativeGenerator;
use crate::services::news_api::NewsSentimentApi;
use crate::services::renderer::{DocumentRenderer, ReportDocument};

/// Fetches the feed once, aggregates it, generates the narrative and renders
/// the report to `config.output_path`.
#[tracing::instrument(skip_all, fields(ticker = %config.ticker))]
pub async fn run_live<N, G, R>(
    config: &Config,
    news: &N,
    narrator: &G,
    renderer: &R,
) -> Result<AggregateResult>
where
    N: NewsSentimentApi + ?Sized,
    G: NarrativeGenerator + ?Sized,
    R: DocumentRenderer + ?Sized,
{
    config.validate()?;

    let feed = news.news_sentiment(&config.ticker).await?;
    let result = assemble(&feed, &config.ticker, config.top_n)?;
    print_pretty(&result);
    print_json(&result)?;

    let narrative = narrator.generate(&result).await?;
    let document = ReportDocument::from_result(&result, narrative);
    renderer.render(&document, &config.output_path)?;

    if let Some(history) = &config.history_path {
        append_record(history, &RunRecord::new(&result, &config.output_path))?;
    }

    info!(path = %config.output_path.display(), "Live report created");
    Ok(result)
}

/// Renders the bundled sample narrative with its fixed score and label.
///
/// Only `config.output_path` is used; the configured ticker and history file
/// do not apply to the fixture.
#[tracing::instrument(skip_all)]
pub async fn run_sample<R>(config: &Config, renderer: &R) -> Result<ReportDocument>
where
    R: DocumentRenderer + ?Sized,
{
    if config.ticker != SAMPLE_TICKER {
        info!(
            requested = %config.ticker,
            sample = SAMPLE_TICKER,
            "Sample mode renders the bundled ticker"
        );
    }
    if let Some(history) = &config.history_path {
        warn!(path = %history.display(), "Run history is not recorded in sample mode");
    }

    let result = sample_result();
    let narrative = SampleNarrator.generate(&result).await?;
    let document = ReportDocument::from_result(&result, narrative);
    renderer.render(&document, &config.output_path)?;

    info!(path = %config.output_path.display(), "Sample report created");
    Ok(document)
}
