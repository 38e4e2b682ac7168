//! Quiz endpoints

use axum::{body::Bytes, extract::State, Json};
use trivia_core::QuizSelection;

use crate::error::Result;
use crate::models::*;
use crate::routes::parse_body;
use crate::AppState;

/// POST /quizzes
/// Returns a random question not in `previous_questions`, or `question: null`
/// once the pool is exhausted
pub async fn next_question(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<QuizResponse>>> {
    let request: QuizRequest = parse_body(&body, "Invalid JSON in the Request")?;

    let categories = state.db.get_category_map().await?;
    let questions = state.db.get_questions().await?;
    let seen = request.seen();

    let selection = trivia_core::select_question(
        &questions,
        &categories,
        &seen,
        request.category_id(),
        &mut rand::thread_rng(),
    );

    match &selection {
        QuizSelection::Question { question, remaining } => tracing::debug!(
            question_id = question.id,
            remaining,
            seen = seen.len(),
            "Selected quiz question"
        ),
        QuizSelection::Exhausted => tracing::debug!(seen = seen.len(), "Quiz pool exhausted"),
    }

    Ok(Json(ApiResponse::ok(QuizResponse {
        question: selection.question().cloned(),
        remaining: selection.remaining(),
    })))
}
