use crate::analyzers::aggregate::{Match, matching};
use crate::analyzers::types::{ArticleSummary, FeedItem};

/// Number of articles handed to the narrative by default.
pub const DEFAULT_TOP_N: usize = 5;

/// Returns up to `limit` articles mentioning `ticker`, most relevant first.
///
/// The sort is stable, so articles with equal relevance keep feed order.
pub fn top_relevant(feed: &[FeedItem], ticker: &str, limit: usize) -> Vec<ArticleSummary> {
    rank(&matching(feed, ticker), limit)
}

/// Ranks already-matched articles by relevance and keeps the first `limit`.
pub fn rank(matches: &[Match<'_>], limit: usize) -> Vec<ArticleSummary> {
    let mut articles: Vec<ArticleSummary> = matches
        .iter()
        .map(|(item, sentiment)| ArticleSummary {
            url: item.url.clone(),
            published_at: item.published_at.clone(),
            relevance_score: sentiment.relevance_score,
            title: item.title.clone(),
        })
        .collect();

    articles.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    articles.truncate(limit);
    articles
}
