//! Category endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::routes::parse_id;
use crate::AppState;

/// GET /categories
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CategoryListResponse>>> {
    let categories = state.db.get_category_map().await?;
    Ok(Json(ApiResponse::ok(CategoryListResponse { categories })))
}

/// GET /categories/:category_id/questions
pub async fn questions(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<ApiResponse<CategoryQuestionsResponse>>> {
    let category_id = parse_id(&category_id)?;

    let categories = state.db.get_category_map().await?;
    let questions = state.db.get_questions().await?;

    let result = trivia_core::filter_by_category(&questions, &categories, category_id)?;
    let questions: Vec<Question> = result.questions.into_iter().cloned().collect();

    Ok(Json(ApiResponse::ok(CategoryQuestionsResponse {
        total_questions: questions.len(),
        questions,
        current_category: result.current_category,
    })))
}
