use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use super::prompt::{SYSTEM_PROMPT, user_prompt};
use crate::analyzers::types::AggregateResult;
use crate::config::{ApiKeys, Config};
use crate::error::{ReportError, Result};
use crate::fetch::auth::ApiKey;
use crate::fetch::{BasicClient, HttpClient, endpoint, post_json};
use crate::services::narrative::NarrativeGenerator;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Chat-completions client for OpenAI-compatible endpoints.
pub struct OpenAiNarrator<C> {
    client: C,
    endpoint: Url,
    model: String,
}

impl OpenAiNarrator<ApiKey<BasicClient>> {
    pub fn from_config(config: &Config, keys: &ApiKeys) -> Result<Self> {
        let transport = BasicClient::new(config.request_timeout)?;
        let client = ApiKey::bearer(transport, &keys.openai)?;
        Self::new(client, &config.openai_base_url, &config.model)
    }
}

impl<C: HttpClient> OpenAiNarrator<C> {
    pub fn new(client: C, base_url: &str, model: &str) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: endpoint(base_url, &["v1", "chat", "completions"])?,
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl<C: HttpClient> NarrativeGenerator for OpenAiNarrator<C> {
    #[tracing::instrument(skip_all, fields(model = %self.model, ticker = %result.ticker))]
    async fn generate(&self, result: &AggregateResult) -> Result<String> {
        let prompt = user_prompt(result)?;
        debug!(prompt_len = prompt.len(), "Requesting narrative");

        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
        };

        let bytes = post_json(&self.client, self.endpoint.clone(), &request)
            .await
            .map_err(|e| ReportError::Narrative(e.to_string()))?;

        let response: ChatResponse = serde_json::from_slice(&bytes)
            .map_err(|e| ReportError::Narrative(format!("malformed completion: {e}")))?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| ReportError::Narrative("completion contained no text".into()))?;

        info!(chars = text.len(), "Narrative generated");
        Ok(text)
    }
}
