//! Router assembly.

pub mod health;
pub mod products;
pub mod search;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Header naming the search branch that produced an `/api/ai-search` response.
pub const SEARCH_OUTCOME_HEADER: &str = "x-search-outcome";

/// Build the application router.
///
/// CORS is fully permissive and every request is traced.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/GetProducts", get(products::list_products))
        .route("/GetProduct/{product_id}", get(products::get_product))
        .route("/UpdateProduct", post(products::update_product))
        .route(
            "/UpdateProduct/{product_id}",
            axum::routing::put(products::update_product_by_id),
        )
        .route("/api/products", post(products::create_product))
        .route("/api/AiSearch", post(search::extract_keywords))
        .route("/api/ai-search", post(search::search_products))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
