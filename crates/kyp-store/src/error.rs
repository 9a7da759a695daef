//! Error types for kyp-store.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for kyp-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kyp-store.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from kyp-core (record validation)
    #[error("Core error: {0}")]
    Core(#[from] kyp_core::Error),

    /// No record with this id
    #[error("Record not found: {id}")]
    NotFound {
        /// Product id that was looked up
        id: String,
    },

    /// A record with this id already exists
    #[error("Record already exists: {id}")]
    Conflict {
        /// Product id that collided
        id: String,
    },

    /// Catalog file could not be read or written
    #[error("Storage I/O error at {}: {source}", path.display())]
    Io {
        /// Catalog file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not a JSON array of records
    #[error("Corrupt catalog at {}: {source}", path.display())]
    Corrupt {
        /// Catalog file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Creates a not-found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Creates a conflict error.
    pub fn conflict(id: impl Into<String>) -> Self {
        Error::Conflict { id: id.into() }
    }

    /// Returns whether the error was caused by the caller's request.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Core(e) => e.is_client_error(),
            Error::NotFound { .. } | Error::Conflict { .. } => true,
            Error::Io { .. } | Error::Corrupt { .. } => false,
        }
    }
}
