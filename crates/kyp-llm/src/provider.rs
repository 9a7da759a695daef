//! Completion provider trait.

use async_trait::async_trait;

use crate::{CompletionRequest, CompletionResponse, Result};

/// A text-completion backend.
///
/// Implementations send exactly one request per call and keep no
/// per-call state, so a single instance can be shared across tasks
/// behind an `Arc`.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short name used in logs and health output.
    fn name(&self) -> &str;

    /// Execute a completion.
    ///
    /// Returns the content of the first choice. Network failures and
    /// non-success statuses map to [`Error::UpstreamUnavailable`]; a payload
    /// without choices or content maps to [`Error::UpstreamMalformed`].
    ///
    /// [`Error::UpstreamUnavailable`]: crate::Error::UpstreamUnavailable
    /// [`Error::UpstreamMalformed`]: crate::Error::UpstreamMalformed
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}
