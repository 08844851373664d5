// src/handlers/questions.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{
    error::AppError,
    extract::{AppJson, AppPath, AppQuery},
    models::{
        category::category_map,
        question::{CreateQuestionRequest, PageParams, QuestionList, QuestionPage, SearchRequest},
    },
    state::SharedStore,
};

/// Lists questions ten at a time, with the total count and all categories.
/// A page past the end is an empty page, not an error.
pub async fn list_questions(
    State(store): State<SharedStore>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let (offset, limit) = params.window()?;

    let questions = store.list_questions(offset, limit).await?;
    let total_questions = store.count_questions().await?;
    let categories = store.list_categories().await?;

    Ok(Json(QuestionPage {
        success: true,
        questions,
        total_questions,
        categories: category_map(&categories),
        current_category: None,
    }))
}

/// Creates a new question.
///
/// * All four fields must be present (400 otherwise), checked before touching the store.
/// * Empty texts or a negative difficulty are rejected with 422.
pub async fn create_question(
    State(store): State<SharedStore>,
    AppJson(payload): AppJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_question = payload.into_new_question()?;

    let id = store.insert_question(new_question).await?;
    tracing::info!(question_id = id, "question created");

    Ok(Json(json!({
        "success": true,
        "message": "Question created",
        "created": id,
    })))
}

/// Deletes a question by ID.
pub async fn delete_question(
    State(store): State<SharedStore>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !store.delete_question(id).await? {
        return Err(AppError::NotFound(format!("Question {} not found", id)));
    }
    tracing::info!(question_id = id, "question deleted");

    Ok(Json(json!({
        "success": true,
        "message": "Question deleted",
        "deleted": id,
    })))
}

/// Case-insensitive substring search over question texts.
pub async fn search_questions(
    State(store): State<SharedStore>,
    AppJson(payload): AppJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let term = payload.search_term.unwrap_or_default();
    let questions = store.search_questions(&term).await?;

    Ok(Json(QuestionList::new(questions, None)))
}
