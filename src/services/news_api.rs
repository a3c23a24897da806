//! Trait for news-sentiment providers.

use crate::analyzers::types::FeedItem;
use crate::error::Result;

/// Abstraction over a news-sentiment provider (e.g., Alpha Vantage).
#[async_trait::async_trait]
pub trait NewsSentimentApi: Send + Sync {
    /// Returns the provider's current news feed for `ticker`, in feed order.
    async fn news_sentiment(&self, ticker: &str) -> Result<Vec<FeedItem>>;
}
