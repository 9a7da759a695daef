//! Keyword extraction and search endpoints.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use http::HeaderValue;
use http::header::HeaderName;
use kyp_search::{KeywordSet, Query};
use serde::Deserialize;

use crate::routes::SEARCH_OUTCOME_HEADER;
use crate::{ApiError, AppState};

/// Body of both search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    /// Free-text query
    #[serde(default)]
    pub query: String,
}

/// `POST /api/AiSearch`
///
/// Returns the extracted keywords. Unlike `/api/ai-search` this surfaces
/// upstream failures as `502`.
pub async fn extract_keywords(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<KeywordSet>, ApiError> {
    let Json(request) = body?;
    let query = Query::parse(&request.query)?;
    let keywords = state.pipeline.extract(&query).await?;
    tracing::debug!(query = %query, keywords = ?keywords.as_strs(), "Keywords extracted");
    Ok(Json(keywords))
}

/// `POST /api/ai-search`
///
/// Returns matching records. The `x-search-outcome` header names the branch
/// that produced them.
pub async fn search_products(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let outcome = state
        .pipeline
        .search(&request.query, state.store.as_ref())
        .await?;

    let header = (
        HeaderName::from_static(SEARCH_OUTCOME_HEADER),
        HeaderValue::from_static(outcome.label()),
    );
    Ok(([header], Json(outcome.into_records())))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use http::StatusCode;
    use kyp_llm::MockCompletionProvider;
    use serde_json::json;

    use crate::routes::SEARCH_OUTCOME_HEADER;
    use crate::routes::test_support::*;

    fn ids(body: &serde_json::Value) -> Vec<&str> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|r| r["productId"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_ai_search_uses_keywords() {
        let state = state_with(MockCompletionProvider::with_response(r#"["20"]"#));

        let request = json("POST", "/api/ai-search", json!({"query": "under 20"}));
        let response = send(state, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[SEARCH_OUTCOME_HEADER], "ai");
        assert_eq!(ids(&body_json(response).await), vec!["P001"]);
    }

    #[tokio::test]
    async fn test_ai_search_falls_back_when_upstream_is_down() {
        let state = state_with(MockCompletionProvider::unavailable());

        let response = send(state, json("POST", "/api/ai-search", json!({"query": "rgb"}))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[SEARCH_OUTCOME_HEADER], "fallback");
        assert_eq!(ids(&body_json(response).await), vec!["P002"]);
    }

    #[tokio::test]
    async fn test_ai_search_blank_query_lists_everything() {
        let state = state_with(MockCompletionProvider::with_response("[]"));

        let response = send(state, json("POST", "/api/ai-search", json!({"query": " "}))).await;

        assert_eq!(response.headers()[SEARCH_OUTCOME_HEADER], "unfiltered");
        assert_eq!(ids(&body_json(response).await), vec!["P002", "P001"]);
    }

    #[tokio::test]
    async fn test_ai_search_missing_query_field_lists_everything() {
        let response = send(local_state(), json("POST", "/api/ai-search", json!({}))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[SEARCH_OUTCOME_HEADER], "unfiltered");
    }

    #[tokio::test(start_paused = true)]
    async fn test_ai_search_survives_slow_upstream() {
        let mock = MockCompletionProvider::with_response(r#"["mouse"]"#)
            .with_delay(Duration::from_secs(120));
        let state = state_with(mock);

        let response = send(state, json("POST", "/api/ai-search", json!({"query": "mouse"}))).await;

        assert_eq!(response.headers()[SEARCH_OUTCOME_HEADER], "fallback");
        assert_eq!(ids(&body_json(response).await), vec!["P001"]);
    }

    #[tokio::test]
    async fn test_keywords_endpoint_returns_array() {
        let state = state_with(MockCompletionProvider::with_response(r#"["rgb", "keyboard"]"#));

        let request = json("POST", "/api/AiSearch", json!({"query": "RGB keyboard"}));
        let response = send(state, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!(["rgb", "keyboard"]));
    }

    #[tokio::test]
    async fn test_keywords_endpoint_rejects_blank_query() {
        let state = state_with(MockCompletionProvider::with_response("[]"));

        let response = send(state, json("POST", "/api/AiSearch", json!({"query": ""}))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_keywords_endpoint_reports_upstream_failure() {
        for mock in [
            MockCompletionProvider::unavailable(),
            MockCompletionProvider::with_response("not json"),
        ] {
            let response = send(
                state_with(mock),
                json("POST", "/api/AiSearch", json!({"query": "mouse"})),
            )
            .await;

            assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
            assert_eq!(body_json(response).await["error"]["category"], "upstream");
        }
    }

    #[tokio::test]
    async fn test_wrong_content_type_uses_error_envelope() {
        for uri in ["/api/ai-search", "/api/AiSearch"] {
            let request = raw("POST", uri, "text/plain", r#"{"query": "mouse"}"#);
            let response = send(local_state(), request).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(response).await["error"]["category"], "validation");
        }
    }
}
