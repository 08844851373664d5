// src/handlers/health.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{error::AppError, state::SharedStore};

/// Readiness check; fails with 500 when the store cannot be queried.
pub async fn health(State(store): State<SharedStore>) -> Result<impl IntoResponse, AppError> {
    store.list_categories().await?;
    Ok(Json(json!({ "success": true })))
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}
