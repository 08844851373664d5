// src/handlers/quiz.rs

use axum::{Json, extract::State};

use crate::{
    error::AppError,
    extract::AppJson,
    models::quiz::{QuizRequest, QuizResponse},
    quiz,
    state::SharedStore,
};

/// Serves the next quiz question.
///
/// Picks uniformly among the questions of the requested category (or all
/// categories) that are not in `previous_questions`. When none are left the
/// response is still a success, with `question: null`.
pub async fn next_question(
    State(store): State<SharedStore>,
    AppJson(request): AppJson<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let filter = request.into_filter();
    let question = quiz::next_question(store.as_ref(), &filter).await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
