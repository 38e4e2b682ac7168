//! Question endpoints

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use trivia_core::{PageRequest, SearchTerm};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::{parse_body, parse_id};
use crate::AppState;

/// GET /questions?page=N
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<QuestionPageQuery>,
) -> Result<Json<ApiResponse<QuestionPageResponse>>> {
    let request = PageRequest::from_query(query.page.as_deref());

    let questions = state.db.get_questions().await?;
    let page = trivia_core::paginate(&questions, request)?;

    Ok(Json(ApiResponse::ok(QuestionPageResponse {
        questions: page.items.to_vec(),
        total_questions: page.total,
        categories: state.db.get_category_map().await?,
        current_category: None,
    })))
}

/// POST /questions
/// Searches when the body carries a non-empty `searchTerm`, creates otherwise
pub async fn create_or_search(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<QuestionsPostResponse>>> {
    let request: QuestionsPostRequest = parse_body(&body, "request does not contain a JSON body")?;

    let response = match SearchTerm::new(request.search_term) {
        Some(term) => QuestionsPostResponse::Search(search(&state, &term).await?),
        None => QuestionsPostResponse::Created(create(&state, &request.draft).await?),
    };

    Ok(Json(ApiResponse::ok(response)))
}

async fn search(state: &AppState, term: &SearchTerm) -> Result<SearchResponse> {
    let questions = state.db.get_questions().await?;
    let found: Vec<Question> = trivia_core::search(&questions, term)?
        .into_iter()
        .cloned()
        .collect();

    Ok(SearchResponse {
        total_questions: found.len(),
        questions: found,
        current_category: None,
    })
}

async fn create(state: &AppState, draft: &QuestionDraft) -> Result<CreateQuestionResponse> {
    let new_question = draft.validate()?;

    let categories = state.db.get_category_map().await?;
    if !categories.contains_key(&new_question.category) {
        return Err(trivia_core::CatalogError::UnknownCategory {
            id: new_question.category,
        }
        .into());
    }

    let question_id = state.db.insert_question(&new_question).await?;

    tracing::info!("Created question {}", question_id);

    Ok(CreateQuestionResponse { question_id })
}

/// DELETE /questions/:question_id
pub async fn delete(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<Json<ApiResponse<DeleteQuestionResponse>>> {
    let question_id = parse_id(&question_id)?;
    let not_found = || ApiError::from(trivia_core::CatalogError::QuestionNotFound { id: question_id });

    state
        .db
        .get_question(question_id)
        .await?
        .ok_or_else(not_found)?;

    // A concurrent delete may win between the lookup and here.
    if !state.db.delete_question(question_id).await? {
        return Err(not_found());
    }

    tracing::info!("Deleted question {}", question_id);

    Ok(Json(ApiResponse::ok(DeleteQuestionResponse {
        deleted: question_id,
        message: format!("Deleted question with id {} successfully", question_id),
    })))
}
