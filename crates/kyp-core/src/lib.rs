//! KYP Core: shared types, errors, and configuration.
//!
//! This crate provides the foundational types used across all KYP crates.
//! It has no internal KYP dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`record`]: The product [`Record`] entity
//! - [`config`]: Service configuration and loading

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod record;

mod proptests;

// Re-exports for convenience
pub use config::{CompletionConfig, KypConfig, ServerConfig, StoreConfig};
pub use error::{Error, Result};
pub use record::Record;
