//! Scripted completion provider.
//!
//! Used by tests across the workspace and by the CLI when running offline.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::{CompletionProvider, CompletionRequest, CompletionResponse, Error, Result};

/// One scripted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Return this text as the completion content.
    Content(String),
    /// Fail as if the service were unreachable.
    Unavailable,
    /// Fail as if the payload had no content.
    Malformed,
}

/// A provider that replays scripted replies in order.
///
/// When the script runs out, the last reply repeats. Every request is
/// recorded so tests can inspect what was sent.
pub struct MockCompletionProvider {
    replies: Mutex<VecDeque<MockReply>>,
    last: Mutex<Option<MockReply>>,
    requests: Mutex<Vec<CompletionRequest>>,
    delay: Option<Duration>,
}

impl MockCompletionProvider {
    /// Creates a provider that returns each response in turn.
    pub fn new(responses: Vec<String>) -> Self {
        Self::scripted(responses.into_iter().map(MockReply::Content).collect())
    }

    /// Creates a provider that always returns the same content.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::scripted(vec![MockReply::Content(response.into())])
    }

    /// Creates a provider that always fails as unreachable.
    pub fn unavailable() -> Self {
        Self::scripted(vec![MockReply::Unavailable])
    }

    /// Creates a provider that always answers without usable content.
    pub fn malformed() -> Self {
        Self::scripted(vec![MockReply::Malformed])
    }

    /// Creates a provider from an explicit script.
    pub fn scripted(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            last: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Sleep before answering, to exercise caller timeouts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Requests received, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn next_reply(&self) -> Option<MockReply> {
        let mut replies = self.replies.lock().unwrap_or_else(|e| e.into_inner());
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(reply) = replies.pop_front() {
            *last = Some(reply.clone());
            return Some(reply);
        }
        last.clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.next_reply() {
            Some(MockReply::Content(text)) => Ok(CompletionResponse::new(text)),
            Some(MockReply::Unavailable) => Err(Error::unavailable("mock provider is offline")),
            Some(MockReply::Malformed) => {
                Err(Error::malformed("mock provider returned no content"))
            }
            None => Err(Error::malformed("mock provider has no scripted replies")),
        }
    }
}
