use crate::analyzers::types::{FeedItem, TickerSentiment};
use crate::analyzers::utility::mean;
use crate::error::{ReportError, Result};
use tracing::debug;

/// A feed item paired with its sentiment entry for the target ticker.
pub type Match<'a> = (&'a FeedItem, &'a TickerSentiment);

/// Pairs every feed item that mentions `ticker` with its sentiment entry.
///
/// Items without an entry for `ticker` are skipped, each logged once.
pub fn matching<'a>(feed: &'a [FeedItem], ticker: &str) -> Vec<Match<'a>> {
    feed.iter()
        .filter_map(|item| match item.sentiment_for(ticker) {
            Some(sentiment) => Some((item, sentiment)),
            None => {
                debug!(url = %item.url, ticker, "Article does not mention ticker, skipping");
                None
            }
        })
        .collect()
}

/// Mean sentiment over already-matched articles.
pub fn mean_score(matches: &[Match<'_>], ticker: &str) -> Result<f64> {
    let scores: Vec<f64> = matches
        .iter()
        .map(|(_, sentiment)| sentiment.sentiment_score)
        .collect();

    mean(&scores).ok_or_else(|| ReportError::EmptyInput {
        ticker: ticker.to_string(),
    })
}

/// Averages the sentiment score of `ticker` over every article that mentions it.
///
/// Articles lacking the ticker do not count towards the denominator.
///
/// # Errors
///
/// Returns [`ReportError::EmptyInput`] when no article mentions the ticker.
pub fn aggregate(feed: &[FeedItem], ticker: &str) -> Result<f64> {
    mean_score(&matching(feed, ticker), ticker)
}
