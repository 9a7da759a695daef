//! Error types for kyp-llm.

use std::time::Duration;

/// Errors returned by completion providers.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The service could not be reached, timed out, or answered with a
    /// non-success status.
    #[error("Completion service unavailable: {message}")]
    UpstreamUnavailable {
        /// Human-readable error message
        message: String,
        /// HTTP status, when the service answered
        status: Option<u16>,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The service answered but the payload had no usable content.
    #[error("Malformed completion response: {message}")]
    UpstreamMalformed {
        /// What was missing or unreadable
        message: String,
    },

    /// Provider misconfiguration (missing key, bad URL).
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Result type alias for kyp-llm operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an unavailable error with a message.
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Error::UpstreamUnavailable {
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Creates an unavailable error with a message and source error.
    pub fn unavailable_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::UpstreamUnavailable {
            message: message.into(),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Creates an unavailable error for a non-success HTTP status.
    pub fn status(status: u16) -> Self {
        Error::UpstreamUnavailable {
            message: format!("service returned HTTP {status}"),
            status: Some(status),
            source: None,
        }
    }

    /// Creates an unavailable error for a call that exceeded its deadline.
    pub fn timeout(after: Duration) -> Self {
        Error::unavailable(format!("no response within {after:?}"))
    }

    /// Creates a malformed-response error.
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Error::UpstreamMalformed {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns `true` for failures caused by the remote service rather than
    /// local configuration.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::UpstreamUnavailable { .. } | Error::UpstreamMalformed { .. }
        )
    }
}
