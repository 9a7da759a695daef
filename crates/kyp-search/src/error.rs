//! Error types for kyp-search.

use thiserror::Error;

/// Result type alias for kyp-search operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while searching.
///
/// Only [`Error::Store`] escapes [`SearchPipeline::search`]; the others are
/// recovered inside the pipeline by falling back to substring matching.
///
/// [`SearchPipeline::search`]: crate::SearchPipeline::search
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Query was empty or whitespace-only
    #[error("Query cannot be empty")]
    EmptyQuery,

    /// Completion service failure
    #[error("Completion error: {0}")]
    Upstream(#[from] kyp_llm::Error),

    /// Completion content was not a JSON array of strings
    #[error("Keyword parse error: {message}")]
    KeywordParse {
        /// What was wrong with the content
        message: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Record snapshot could not be read
    #[error("Storage error: {0}")]
    Store(#[from] kyp_store::Error),
}

impl Error {
    /// Returns whether search can recover from this error with the
    /// substring fallback.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Upstream(_) | Error::KeywordParse { .. })
    }
}
