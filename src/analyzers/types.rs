//! Data types flowing through the aggregation pipeline.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::analyzers::label::SentimentLabel;

/// Timestamp layout used by the news provider, e.g. `20240305T143000`.
const PUBLISHED_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Sentiment of one article towards one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSentiment {
    pub ticker: String,
    pub sentiment_score: f64,
    pub relevance_score: f64,
}

/// One news article and the tickers it discusses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub url: String,
    pub published_at: String,
    pub title: Option<String>,
    pub ticker_sentiments: Vec<TickerSentiment>,
}

impl FeedItem {
    /// Returns the first sentiment entry for `ticker`, if the article has one.
    pub fn sentiment_for(&self, ticker: &str) -> Option<&TickerSentiment> {
        self.ticker_sentiments.iter().find(|s| s.ticker == ticker)
    }
}

/// An article selected for the report, ranked by relevance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleSummary {
    pub url: String,
    pub published_at: String,
    pub relevance_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ArticleSummary {
    /// Formats `published_at` as `YYYY-MM-DD HH:MM`, or returns it unchanged
    /// when it is not in the provider's layout.
    pub fn published_date(&self) -> String {
        NaiveDateTime::parse_from_str(&self.published_at, PUBLISHED_FORMAT)
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| self.published_at.clone())
    }
}

/// Everything the narrative and the document need about one ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub ticker: String,
    pub average_score: f64,
    pub label: SentimentLabel,
    pub article_count: usize,
    pub top_articles: Vec<ArticleSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(sentiments: &[(&str, f64, f64)]) -> FeedItem {
        FeedItem {
            url: "https://example.com/a".into(),
            published_at: "20240305T143000".into(),
            title: None,
            ticker_sentiments: sentiments
                .iter()
                .map(|(t, s, r)| TickerSentiment {
                    ticker: t.to_string(),
                    sentiment_score: *s,
                    relevance_score: *r,
                })
                .collect(),
        }
    }

    #[test]
    fn test_sentiment_for_finds_ticker() {
        let feed_item = item(&[("MSFT", 0.1, 0.2), ("AMZN", 0.3, 0.9)]);
        let found = feed_item.sentiment_for("AMZN").unwrap();
        assert_eq!(found.sentiment_score, 0.3);
        assert!(feed_item.sentiment_for("TSLA").is_none());
    }

    #[test]
    fn test_sentiment_for_is_case_sensitive_and_first_wins() {
        let feed_item = item(&[("AMZN", 0.1, 0.2), ("AMZN", 0.9, 0.9)]);
        assert_eq!(feed_item.sentiment_for("AMZN").unwrap().sentiment_score, 0.1);
        assert!(feed_item.sentiment_for("amzn").is_none());
    }

    #[test]
    fn test_published_date_formats_provider_timestamp() {
        let summary = ArticleSummary {
            url: "u".into(),
            published_at: "20240305T143000".into(),
            relevance_score: 0.5,
            title: None,
        };
        assert_eq!(summary.published_date(), "2024-03-05 14:30");
    }

    #[test]
    fn test_published_date_falls_back_to_raw() {
        let summary = ArticleSummary {
            url: "u".into(),
            published_at: "yesterday".into(),
            relevance_score: 0.5,
            title: None,
        };
        assert_eq!(summary.published_date(), "yesterday");
    }
}
