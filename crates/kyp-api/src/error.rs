//! Error types for kyp-api.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// Result type alias for server lifecycle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop the server.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Listener could not be bound
    #[error("Failed to bind {address}: {source}")]
    Bind {
        /// Requested address
        address: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Server loop failed
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Error::Bind {
            address: address.into(),
            source,
        }
    }
}

/// A failed request, rendered as `{"error": {"category", "message"}}`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    /// Request body or parameters were invalid
    #[error("{message}")]
    BadRequest {
        /// What was wrong
        message: String,
    },

    /// No record with this id
    #[error("Record not found: {id}")]
    NotFound {
        /// Requested product id
        id: String,
    },

    /// A record with this id already exists
    #[error("Record already exists: {id}")]
    Conflict {
        /// Conflicting product id
        id: String,
    },

    /// Completion service failed or returned unusable content
    #[error("Completion service error: {message}")]
    Upstream {
        /// Upstream failure description
        message: String,
    },

    /// Anything else
    #[error("Internal error: {message}")]
    Internal {
        /// Failure description
        message: String,
    },
}

impl ApiError {
    /// Creates a bad-request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short machine-readable category.
    pub fn category(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "validation",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Conflict { .. } => "conflict",
            ApiError::Upstream { .. } => "upstream",
            ApiError::Internal { .. } => "internal",
        }
    }
}

/// Unreadable request bodies: bad JSON, wrong content type, mistyped fields.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<kyp_store::Error> for ApiError {
    fn from(err: kyp_store::Error) -> Self {
        match err {
            kyp_store::Error::NotFound { id } => ApiError::NotFound { id },
            kyp_store::Error::Conflict { id } => ApiError::Conflict { id },
            kyp_store::Error::Core(core) if core.is_client_error() => {
                ApiError::bad_request(core.to_string())
            }
            other => ApiError::internal(other.to_string()),
        }
    }
}

impl From<kyp_search::Error> for ApiError {
    fn from(err: kyp_search::Error) -> Self {
        match err {
            kyp_search::Error::Store(store) => store.into(),
            kyp_search::Error::EmptyQuery => ApiError::bad_request("query cannot be empty"),
            other if other.is_recoverable() => ApiError::Upstream {
                message: other.to_string(),
            },
            other => ApiError::internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = serde_json::json!({
            "error": {
                "category": self.category(),
                "message": self.to_string(),
            }
        });

        (
            status,
            [(http::header::CONTENT_TYPE, "application/json")],
            serde_json::to_string(&body).unwrap_or_default(),
        )
            .into_response()
    }
}
