//! Completion client bound to the keyword-extraction prompt.

use std::sync::Arc;
use std::time::Duration;

use kyp_core::CompletionConfig;
use kyp_core::config::DEFAULT_KEYWORD_PROMPT;
use kyp_llm::{CompletionProvider, CompletionRequest, Message};

use crate::Query;

const DEFAULT_MAX_TOKENS: u32 = 200;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Sends one query to a completion provider and returns the raw content.
///
/// Every call is bounded by a timeout. Expiry is reported as
/// [`kyp_llm::Error::UpstreamUnavailable`] and the in-flight request is
/// dropped.
#[derive(Clone)]
pub struct CompletionClient {
    provider: Arc<dyn CompletionProvider>,
    system_prompt: String,
    max_tokens: u32,
    timeout: Duration,
}

impl CompletionClient {
    /// Creates a client with the default prompt, a 200 token cap and a
    /// five second timeout.
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            system_prompt: DEFAULT_KEYWORD_PROMPT.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a client using the prompt, token cap and timeout from config.
    pub fn from_config(provider: Arc<dyn CompletionProvider>, config: &CompletionConfig) -> Self {
        Self::new(provider)
            .with_system_prompt(config.system_prompt.clone())
            .with_max_tokens(config.max_tokens)
            .with_timeout(config.timeout())
    }

    /// Override the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Override the completion token cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Override the call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Configured call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ask the provider for keywords and return its content verbatim.
    pub async fn complete(&self, query: &Query) -> kyp_llm::Result<String> {
        let request = CompletionRequest::new(vec![Message::user(query.as_str())])
            .with_system_prompt(self.system_prompt.clone())
            .with_max_tokens(self.max_tokens)
            .with_temperature(0.0);

        match tokio::time::timeout(self.timeout, self.provider.complete(request)).await {
            Ok(result) => result.map(|response| response.content),
            Err(_) => Err(kyp_llm::Error::timeout(self.timeout)),
        }
    }
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("provider", &self.provider.name())
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
