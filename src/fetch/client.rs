use async_trait::async_trait;
use reqwest::{Request, Response};

/// Minimal transport seam so auth wrappers and test doubles can be layered
/// around a real `reqwest::Client`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
