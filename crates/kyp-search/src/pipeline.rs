//! Search orchestration.
//!
//! One call handles one request and keeps no state between calls. The
//! completion service is the only suspension point; it is bounded by the
//! [`CompletionClient`] timeout, and dropping the returned future abandons
//! the in-flight call.

use std::fmt;

use kyp_core::Record;
use kyp_store::RecordStore;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    CompletionClient, Error, KeywordSet, Query, Result, extract_keywords, fallback_filter,
    filter_records,
};

/// Why a search used the substring fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The service was unreachable, timed out, failed, or is not configured.
    UpstreamUnavailable,
    /// The service answered without usable content.
    UpstreamMalformed,
    /// The content was not a JSON array of strings.
    KeywordParseError,
}

impl FallbackReason {
    /// Classify a recoverable extraction error.
    ///
    /// Returns `None` for errors the fallback cannot absorb.
    pub fn from_error(err: &Error) -> Option<Self> {
        match err {
            Error::Upstream(kyp_llm::Error::UpstreamMalformed { .. }) => {
                Some(FallbackReason::UpstreamMalformed)
            }
            Error::Upstream(_) => Some(FallbackReason::UpstreamUnavailable),
            Error::KeywordParse { .. } => Some(FallbackReason::KeywordParseError),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::UpstreamUnavailable => "upstream_unavailable",
            FallbackReason::UpstreamMalformed => "upstream_malformed",
            FallbackReason::KeywordParseError => "keyword_parse_error",
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one search, tagged with the branch that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The query was blank; every record is returned.
    Unfiltered(Vec<Record>),
    /// Keywords were extracted and applied.
    AiFiltered {
        /// Matching records, in catalog order
        records: Vec<Record>,
        /// Keywords the filter used
        keywords: KeywordSet,
    },
    /// Extraction failed and the substring fallback was applied.
    LocalFallbackFiltered {
        /// Matching records, in catalog order
        records: Vec<Record>,
        /// What went wrong upstream
        reason: FallbackReason,
    },
}

impl SearchOutcome {
    /// The resulting records.
    pub fn records(&self) -> &[Record] {
        match self {
            SearchOutcome::Unfiltered(records)
            | SearchOutcome::AiFiltered { records, .. }
            | SearchOutcome::LocalFallbackFiltered { records, .. } => records,
        }
    }

    /// Consume the outcome, keeping only the records.
    pub fn into_records(self) -> Vec<Record> {
        match self {
            SearchOutcome::Unfiltered(records)
            | SearchOutcome::AiFiltered { records, .. }
            | SearchOutcome::LocalFallbackFiltered { records, .. } => records,
        }
    }

    /// `"unfiltered"`, `"ai"` or `"fallback"`.
    pub fn label(&self) -> &'static str {
        match self {
            SearchOutcome::Unfiltered(_) => "unfiltered",
            SearchOutcome::AiFiltered { .. } => "ai",
            SearchOutcome::LocalFallbackFiltered { .. } => "fallback",
        }
    }

    /// Returns `true` when the substring fallback produced this outcome.
    pub fn is_fallback(&self) -> bool {
        matches!(self, SearchOutcome::LocalFallbackFiltered { .. })
    }
}

/// Query → keywords → filtered records.
///
/// Without a [`CompletionClient`] every non-blank query takes the fallback
/// branch with [`FallbackReason::UpstreamUnavailable`].
#[derive(Debug, Clone)]
pub struct SearchPipeline {
    client: Option<CompletionClient>,
}

impl SearchPipeline {
    /// Creates a pipeline backed by a completion client.
    pub fn new(client: CompletionClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Creates a pipeline that only uses the substring fallback.
    pub fn local_only() -> Self {
        Self { client: None }
    }

    /// Returns `true` when a completion client is attached.
    pub fn is_completion_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Extract keywords for a query without filtering anything.
    ///
    /// Unlike [`evaluate`](Self::evaluate), failures are returned as-is.
    pub async fn extract(&self, query: &Query) -> Result<KeywordSet> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| kyp_llm::Error::unavailable("completion service is not configured"))?;

        let content = client.complete(query).await?;
        debug!(
            provider = client.provider_name(),
            content_len = content.len(),
            "Completion received"
        );
        extract_keywords(&content)
    }

    /// Run the search over an in-memory snapshot.
    ///
    /// Never fails: a blank query yields [`SearchOutcome::Unfiltered`] and
    /// any extraction failure yields [`SearchOutcome::LocalFallbackFiltered`].
    pub async fn evaluate(&self, raw: &str, records: Vec<Record>) -> SearchOutcome {
        let query = match Query::parse(raw) {
            Ok(query) => query,
            Err(_) => {
                debug!(count = records.len(), "Blank query, returning all records");
                return SearchOutcome::Unfiltered(records);
            }
        };

        match self.extract(&query).await {
            Ok(keywords) => {
                let matched = filter_records(&records, &keywords);
                info!(
                    query = %query,
                    keywords = ?keywords.as_strs(),
                    total = records.len(),
                    matched = matched.len(),
                    "Keyword search complete"
                );
                SearchOutcome::AiFiltered {
                    records: matched,
                    keywords,
                }
            }
            Err(err) => {
                let reason =
                    FallbackReason::from_error(&err).unwrap_or(FallbackReason::UpstreamUnavailable);
                let matched = fallback_filter(&records, &query);
                warn!(
                    query = %query,
                    reason = %reason,
                    error = %err,
                    matched = matched.len(),
                    "Keyword extraction failed, using substring fallback"
                );
                SearchOutcome::LocalFallbackFiltered {
                    records: matched,
                    reason,
                }
            }
        }
    }

    /// Read a snapshot from `store` and search it.
    ///
    /// Only a failure to read the store is returned as an error.
    pub async fn search(&self, raw: &str, store: &dyn RecordStore) -> Result<SearchOutcome> {
        let records = store.all_records().await.map_err(Error::Store)?;
        Ok(self.evaluate(raw, records).await)
    }

    /// Like [`search`](Self::search), returning only the records.
    pub async fn search_records(&self, raw: &str, store: &dyn RecordStore) -> Result<Vec<Record>> {
        Ok(self.search(raw, store).await?.into_records())
    }
}
