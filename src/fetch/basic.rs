use super::client::HttpClient;
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct BasicClient(reqwest::Client);

impl BasicClient {
    /// Builds a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .user_agent(concat!("sentiment_report/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self(inner))
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}
