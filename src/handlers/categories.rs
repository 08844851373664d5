// src/handlers/categories.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{
    error::AppError,
    extract::AppPath,
    models::{category::category_map, question::QuestionList},
    state::SharedStore,
};

/// Lists every category as an `{ "<id>": "<type>" }` mapping.
pub async fn list_categories(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let categories = store.list_categories().await?;

    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
    })))
}

/// Lists all questions of one category.
/// 404 if the category does not exist; an existing but empty category yields an empty list.
pub async fn list_questions_by_category(
    State(store): State<SharedStore>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let category = store
        .find_category(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

    let questions = store.questions_in_category(category.id).await?;

    Ok(Json(QuestionList::new(
        questions,
        Some(category.category_type),
    )))
}
