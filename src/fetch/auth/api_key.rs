use crate::error::{ReportError, Result};
use crate::fetch::client::HttpClient;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};

/// An [`HttpClient`] wrapper that injects an API key as an HTTP header.
///
/// Header name and value are validated once at construction, so a malformed
/// key is reported as a configuration error instead of panicking mid-request.
pub struct ApiKey<C> {
    inner: C,
    header_name: HeaderName,
    value: HeaderValue,
}

impl<C> ApiKey<C> {
    pub fn new(inner: C, header_name: &str, key: &str) -> Result<Self> {
        let header_name = HeaderName::from_bytes(header_name.as_bytes())
            .map_err(|e| ReportError::Config(format!("invalid header name '{header_name}': {e}")))?;
        let mut value = HeaderValue::from_str(key)
            .map_err(|_| ReportError::Config("API key contains invalid header characters".into()))?;
        value.set_sensitive(true);
        Ok(Self {
            inner,
            header_name,
            value,
        })
    }

    /// Uses `Authorization: Bearer <key>`, the scheme expected by
    /// OpenAI-compatible chat endpoints.
    pub fn bearer(inner: C, key: &str) -> Result<Self> {
        Self::new(inner, AUTHORIZATION.as_str(), &format!("Bearer {key}"))
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for ApiKey<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.headers_mut()
            .insert(self.header_name.clone(), self.value.clone());
        self.inner.execute(req).await
    }
}
