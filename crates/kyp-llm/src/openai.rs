//! OpenAI-compatible `chat/completions` provider.

use std::time::Duration;

use async_trait::async_trait;
use kyp_core::CompletionConfig;
use serde::{Deserialize, Serialize};

use crate::{
    CompletionProvider, CompletionRequest, CompletionResponse, Error, Message, Result, TokenUsage,
};

/// Client for any service speaking the OpenAI chat completions protocol.
pub struct OpenAiProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

impl OpenAiProvider {
    /// Create a provider.
    ///
    /// `base_url` is the API root, e.g. `https://api.openai.com/v1`.
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::config("API key must not be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key,
            model: model.into(),
        })
    }

    /// Create a provider from service configuration.
    pub fn from_config(config: &CompletionConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::config("completion.api_key is not set"))?;
        Self::new(api_key, &config.base_url, config.model.clone(), config.timeout())
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Model name sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let body = ChatRequest {
            model: &self.model,
            messages: request.wire_messages(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            "Sending completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::unavailable_with_source("completion request timed out", e)
                } else {
                    Error::unavailable_with_source("completion request failed", e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Completion service rejected request");
            return Err(Error::status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::unavailable_with_source("failed to read completion body", e))?;

        let chat: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| Error::malformed(format!("response is not a chat completion: {e}")))?;

        let content = chat
            .choices
            .and_then(|choices| choices.into_iter().next())
            .ok_or_else(|| Error::malformed("response has no choices"))?
            .message
            .and_then(|message| message.content)
            .ok_or_else(|| Error::malformed("first choice has no message content"))?;

        let tokens_used = chat
            .usage
            .map(|u| TokenUsage {
                prompt: u.prompt_tokens,
                completion: u.completion_tokens,
            })
            .unwrap_or_default();

        tracing::debug!(tokens = tokens_used.total(), "Completion received");

        Ok(CompletionResponse {
            content,
            tokens_used,
        })
    }
}
