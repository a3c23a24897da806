//! JSON parser for Alpha Vantage `NEWS_SENTIMENT` responses.

use serde::Deserialize;

use crate::analyzers::types::{FeedItem, TickerSentiment};
use crate::error::{ReportError, Result};

#[derive(Deserialize)]
struct RawResponse {
    feed: Option<Vec<RawArticle>>,
    #[serde(rename = "Information")]
    information: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct RawArticle {
    url: String,
    time_published: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    ticker_sentiment: Vec<RawTickerSentiment>,
}

#[derive(Deserialize)]
struct RawTickerSentiment {
    ticker: String,
    ticker_sentiment_score: RawScore,
    relevance_score: RawScore,
}

/// Scores arrive as decimal strings (`"0.123456"`); plain numbers are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
}

impl RawScore {
    fn value(&self, field: &str, url: &str) -> Result<f64> {
        let value = match self {
            RawScore::Number(n) => *n,
            RawScore::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                ReportError::Fetch(format!("invalid {field} '{s}' in article {url}"))
            })?,
        };
        if !value.is_finite() {
            return Err(ReportError::Fetch(format!(
                "non-finite {field} in article {url}"
            )));
        }
        Ok(value)
    }
}

impl RawArticle {
    fn into_item(self) -> Result<FeedItem> {
        let ticker_sentiments = self
            .ticker_sentiment
            .iter()
            .map(|raw| {
                Ok(TickerSentiment {
                    ticker: raw.ticker.clone(),
                    sentiment_score: raw
                        .ticker_sentiment_score
                        .value("ticker_sentiment_score", &self.url)?,
                    relevance_score: raw.relevance_score.value("relevance_score", &self.url)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(FeedItem {
            url: self.url,
            published_at: self.time_published,
            title: self.title,
            ticker_sentiments,
        })
    }
}

/// Decodes a `NEWS_SENTIMENT` payload into feed items, preserving feed order.
///
/// # Errors
///
/// Returns [`ReportError::Fetch`] when the payload is not JSON, carries the
/// provider's `Information` / `Note` / `Error Message` instead of a feed
/// (rate limits, bad keys), or contains a score that is not a finite number.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<FeedItem>> {
    let raw: RawResponse = serde_json::from_slice(bytes)
        .map_err(|e| ReportError::Fetch(format!("malformed news payload: {e}")))?;

    match raw.feed {
        Some(articles) => articles.into_iter().map(RawArticle::into_item).collect(),
        None => {
            let message = raw
                .error_message
                .or(raw.information)
                .or(raw.note)
                .unwrap_or_else(|| "response has no 'feed' field".to_string());
            Err(ReportError::Fetch(message))
        }
    }
}
