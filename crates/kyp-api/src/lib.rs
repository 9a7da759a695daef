//! # kyp-api
//!
//! HTTP API for the KYP product catalog.
//!
//! This crate provides:
//! - Record endpoints backed by any [`kyp_store::RecordStore`]
//! - Keyword extraction and catalog search endpoints backed by
//!   [`kyp_search::SearchPipeline`]
//! - A health endpoint
//! - [`Server`]: binds a listener and serves the router until shutdown

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, Error, Result};
pub use routes::router;
pub use server::{Server, shutdown_signal};
pub use state::{AppState, ServiceInfo};
