//! # kyp-store
//!
//! Record storage backends for the KYP product catalog.
//!
//! This crate provides:
//! - [`RecordStore`]: the storage abstraction used by the API and search
//! - [`MemoryStore`]: in-memory storage (tests, demos, ephemeral runs)
//! - [`JsonFileStore`]: a single JSON array file with write-through updates

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{Error, Result};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::RecordStore;
