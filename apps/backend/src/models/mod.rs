//! Database models and API types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from trivia-core
pub use trivia_core::types::{Category, CategoryId, CategoryMap, NewQuestion, Question, QuestionId};
pub use trivia_core::{QuestionDraft, QuizCategory, QuizRequest};

// === Database Entity Types ===

/// Question row in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbQuestion {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl From<DbQuestion> for Question {
    fn from(row: DbQuestion) -> Self {
        Question {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}

/// Category row in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCategory {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub label: String,
}

impl From<DbCategory> for Category {
    fn from(row: DbCategory) -> Self {
        Category {
            id: row.id,
            label: row.label,
        }
    }
}

// === API Request/Response Types ===

/// Successful response envelope: `{"success": true, ...body}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

// Category types
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

// Question types
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionPageQuery {
    pub page: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionPageResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

/// Body of `POST /questions`: either a search or a new question.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuestionsPostRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
    #[serde(flatten)]
    pub draft: QuestionDraft,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateQuestionResponse {
    pub question_id: QuestionId,
}

/// Response of `POST /questions`, shaped by which branch ran.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionsPostResponse {
    Search(SearchResponse),
    Created(CreateQuestionResponse),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteQuestionResponse {
    pub deleted: QuestionId,
    pub message: String,
}

// Quiz types
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub question: Option<Question>,
    pub remaining: usize,
}
