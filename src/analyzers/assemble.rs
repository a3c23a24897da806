use crate::analyzers::aggregate::{matching, mean_score};
use crate::analyzers::label::classify;
use crate::analyzers::rank::rank;
use crate::analyzers::types::{AggregateResult, FeedItem};
use crate::error::Result;
use tracing::info;

/// Builds the [`AggregateResult`] for `ticker` from a single fetched feed.
///
/// Fails with [`ReportError::EmptyInput`](crate::error::ReportError::EmptyInput)
/// exactly when [`aggregate`](crate::analyzers::aggregate::aggregate) does.
/// The feed is matched against `ticker` once and shared by both computations.
pub fn assemble(feed: &[FeedItem], ticker: &str, top_n: usize) -> Result<AggregateResult> {
    let matches = matching(feed, ticker);
    let average_score = mean_score(&matches, ticker)?;
    let article_count = matches.len();
    let label = classify(average_score);
    let top_articles = rank(&matches, top_n);

    info!(
        ticker,
        average_score,
        %label,
        article_count,
        feed_size = feed.len(),
        top_articles = top_articles.len(),
        "Sentiment aggregated"
    );

    Ok(AggregateResult {
        ticker: ticker.to_string(),
        average_score,
        label,
        article_count,
        top_articles,
    })
}
