//! HTTP transport used by the news and narrative clients.

mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use crate::error::{ReportError, Result};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Sends `req` and returns the body, turning non-2xx answers into
/// [`ReportError::Status`].
///
/// Transport errors are stripped of their URL: auth wrappers may have added a
/// key to the query string after the caller built it.
async fn send<C: HttpClient>(client: &C, req: reqwest::Request) -> Result<Vec<u8>> {
    let url = req.url().clone();
    let resp = client.execute(req).await.map_err(|e| e.without_url())?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ReportError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let bytes = resp.bytes().await.map_err(|e| e.without_url())?;
    debug!(%url, bytes = bytes.len(), "Response received");
    Ok(bytes.to_vec())
}

/// Appends `segments` to the path of `base_url`, keeping any path the base
/// already has (`https://host/api` + `query` is `https://host/api/query`).
pub fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| ReportError::Config(format!("base URL '{base_url}' cannot carry a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub async fn fetch_bytes<C: HttpClient>(client: &C, url: Url) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url);
    send(client, req).await
}

/// POSTs `body` as JSON and returns the raw response body.
pub async fn post_json<C: HttpClient, B: Serialize + ?Sized>(
    client: &C,
    url: Url,
    body: &B,
) -> Result<Vec<u8>> {
    let mut req = reqwest::Request::new(reqwest::Method::POST, url);
    req.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    *req.body_mut() = Some(serde_json::to_vec(body)?.into());
    send(client, req).await
}
