//! Test fixtures and factory functions for request bodies.

use serde_json::json;
use uuid::Uuid;

/// Generate a label that will not collide with other test runs.
pub fn unique_label(prefix: &str) -> String {
    format!("{} {}", prefix, &Uuid::new_v4().simple().to_string()[..8])
}

/// Create a question request body.
pub fn create_question_request(
    question: &str,
    answer: &str,
    category: serde_json::Value,
    difficulty: serde_json::Value,
) -> serde_json::Value {
    json!({
        "question": question,
        "answer": answer,
        "category": category,
        "difficulty": difficulty
    })
}

/// Create a search request body.
pub fn search_request(term: &str) -> serde_json::Value {
    json!({ "searchTerm": term })
}

/// Create a quiz request body.
pub fn quiz_request(previous: &[i64], category: Option<i64>) -> serde_json::Value {
    match category {
        Some(id) => json!({
            "previous_questions": previous,
            "quiz_category": { "type": "click", "id": id }
        }),
        None => json!({ "previous_questions": previous }),
    }
}
