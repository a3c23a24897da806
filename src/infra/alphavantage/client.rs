use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::analyzers::types::FeedItem;
use crate::config::{ApiKeys, Config};
use crate::error::{ReportError, Result};
use crate::fetch::auth::UrlParam;
use crate::fetch::{BasicClient, HttpClient, endpoint, fetch_bytes};
use crate::parser::parse_feed;
use crate::services::news_api::NewsSentimentApi;

pub struct AlphaVantageClient<C> {
    client: C,
    query_url: Url,
    feed_limit: u32,
}

impl AlphaVantageClient<UrlParam<BasicClient>> {
    /// Builds the production client: timeout-bounded transport with the key
    /// appended as `apikey`.
    pub fn from_config(config: &Config, keys: &ApiKeys) -> Result<Self> {
        let transport = BasicClient::new(config.request_timeout)?;
        let client = UrlParam::new(transport, "apikey", keys.vantage.clone());
        Self::new(client, &config.vantage_base_url, config.feed_limit)
    }
}

impl<C: HttpClient> AlphaVantageClient<C> {
    pub fn new(client: C, base_url: &str, feed_limit: u32) -> Result<Self> {
        Ok(Self {
            client,
            query_url: endpoint(base_url, &["query"])?,
            feed_limit,
        })
    }

    /// The `NEWS_SENTIMENT` query URL for `ticker`, without the API key.
    pub fn request_url(&self, ticker: &str) -> Result<Url> {
        let mut url = self.query_url.clone();
        url.query_pairs_mut()
            .append_pair("function", "NEWS_SENTIMENT")
            .append_pair("tickers", ticker)
            .append_pair("limit", &self.feed_limit.to_string());
        Ok(url)
    }
}

#[async_trait]
impl<C: HttpClient> NewsSentimentApi for AlphaVantageClient<C> {
    #[tracing::instrument(skip(self))]
    async fn news_sentiment(&self, ticker: &str) -> Result<Vec<FeedItem>> {
        let url = self.request_url(ticker)?;
        debug!(%url, "Requesting news sentiment");

        let bytes = fetch_bytes(&self.client, url)
            .await
            .map_err(|e| match e {
                ReportError::Status { .. } => ReportError::Fetch(e.to_string()),
                other => other,
            })?;
        let feed = parse_feed(&bytes)?;

        info!(articles = feed.len(), "News feed fetched");
        Ok(feed)
    }
}
