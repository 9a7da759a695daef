//! Record endpoints.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use http::StatusCode;
use kyp_core::Record;

use crate::{ApiError, AppState};

/// `GET /GetProducts`
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ApiError> {
    let records = state.store.all_records().await?;
    Ok(Json(records))
}

/// `GET /GetProduct/{product_id}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    state
        .store
        .get(&product_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound { id: product_id })
}

/// `POST /UpdateProduct`
pub async fn update_product(
    State(state): State<AppState>,
    body: Result<Json<Record>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Json(record) = body?;
    let updated = state.store.update(record).await?;
    tracing::info!(product_id = %updated.product_id, "Record updated");
    Ok(Json(updated))
}

/// `PUT /UpdateProduct/{product_id}`
///
/// The path id replaces whatever id the body carries.
pub async fn update_product_by_id(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    body: Result<Json<Record>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Json(mut record) = body?;
    record.product_id = product_id;
    update_product(State(state), Ok(Json(record))).await
}

/// `POST /api/products`
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<Record>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let Json(record) = body?;
    let created = state.store.create(record).await?;
    tracing::info!(product_id = %created.product_id, "Record created");
    Ok((StatusCode::CREATED, Json(created)))
}
