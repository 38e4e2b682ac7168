//! Question selection core shared by the trivia backend.
//!
//! Provides:
//! - Pagination of the id-ordered question catalog
//! - Case-insensitive substring search over question text
//! - Category filtering with label resolution
//! - Quiz question sampling with seen-set exclusion
//! - Shared types and validation for new questions

pub mod category;
pub mod error;
pub mod pagination;
pub mod quiz;
pub mod search;
pub mod types;
pub mod validation;

pub use category::{filter_by_category, CategoryQuestions};
pub use error::{CatalogError, ErrorKind, Result};
pub use pagination::{paginate, Page, PageRequest, QUESTIONS_PER_PAGE};
pub use quiz::{select_question, QuizCategory, QuizRequest, QuizSelection};
pub use search::{search, SearchTerm};
pub use types::{category_map, Category, CategoryId, CategoryMap, NewQuestion, Question, QuestionId};
pub use validation::{QuestionDraft, QuestionField};
