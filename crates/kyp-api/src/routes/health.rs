//! Health endpoint.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Service name.
    pub name: String,
    /// Service version.
    pub version: String,
    /// Whether a completion provider is attached.
    pub completion_enabled: bool,
    /// Storage backend name.
    pub store: String,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        name: state.info.name.clone(),
        version: state.info.version.clone(),
        completion_enabled: state.pipeline.is_completion_enabled(),
        store: state.store.name().to_string(),
    })
}
