//! # kyp-search
//!
//! Turns a free-text product query into a filtered slice of the catalog.
//!
//! ```text
//! query ──► CompletionClient ──► extract_keywords ──► RecordFilter ──► AiFiltered
//!   │              │ unavailable / malformed / unparseable
//!   │              └──────────────► fallback_filter ────────────────► LocalFallbackFiltered
//!   └─ blank ──────────────────────────────────────────────────────► Unfiltered
//! ```
//!
//! Search never fails because of the completion service: the worst case is
//! a plain substring match on the original query.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod filter;
pub mod keyword;
pub mod pipeline;
pub mod query;

mod proptests;

pub use client::CompletionClient;
pub use error::{Error, Result};
pub use extract::extract_keywords;
pub use fallback::fallback_filter;
pub use filter::{MatchField, MatchReason, RecordFilter, filter_records};
pub use keyword::{Keyword, KeywordSet};
pub use pipeline::{FallbackReason, SearchOutcome, SearchPipeline};
pub use query::Query;
