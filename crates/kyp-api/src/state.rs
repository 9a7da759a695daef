//! Shared handler state.

use std::sync::Arc;

use kyp_search::SearchPipeline;
use kyp_store::RecordStore;

/// Name and version reported by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            name: "kyp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Record storage
    pub store: Arc<dyn RecordStore>,
    /// Search pipeline
    pub pipeline: Arc<SearchPipeline>,
    /// Reported identity
    pub info: ServiceInfo,
}

impl AppState {
    /// Creates state with default service info.
    pub fn new(store: Arc<dyn RecordStore>, pipeline: SearchPipeline) -> Self {
        Self {
            store,
            pipeline: Arc::new(pipeline),
            info: ServiceInfo::default(),
        }
    }

    /// Override the reported service info.
    pub fn with_info(mut self, info: ServiceInfo) -> Self {
        self.info = info;
        self
    }
}
