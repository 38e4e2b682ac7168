//! Validation of client-submitted questions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::types::{deserialize_optional_int, NewQuestion};

/// A required field of a new question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionField {
    Question,
    Answer,
    Category,
    Difficulty,
}

impl fmt::Display for QuestionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Question => "Question",
            Self::Answer => "Answer",
            Self::Category => "Category",
            Self::Difficulty => "Difficulty",
        };
        f.write_str(name)
    }
}

/// Body of a create request. Every field is optional on the wire so that a
/// missing field is reported as blank rather than as a decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_int")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_int")]
    pub difficulty: Option<i64>,
}

impl QuestionDraft {
    /// Check fields in order (question, answer, category, difficulty) and
    /// report the first blank one.
    pub fn validate(&self) -> Result<NewQuestion> {
        let question = non_empty(self.question.as_deref(), QuestionField::Question)?;
        let answer = non_empty(self.answer.as_deref(), QuestionField::Answer)?;
        let category = non_zero(self.category, QuestionField::Category)?;
        let difficulty = non_zero(self.difficulty, QuestionField::Difficulty)?;

        // Stored as INTEGER.
        let difficulty = i32::try_from(difficulty).map_err(|_| CatalogError::BlankField {
            field: QuestionField::Difficulty,
        })?;

        Ok(NewQuestion {
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        })
    }
}

fn non_empty(value: Option<&str>, field: QuestionField) -> Result<&str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CatalogError::BlankField { field }),
    }
}

fn non_zero(value: Option<i64>, field: QuestionField) -> Result<i64> {
    match value {
        Some(v) if v != 0 => Ok(v),
        _ => Err(CatalogError::BlankField { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            question: Some("Who painted the Mona Lisa?".to_string()),
            answer: Some("Leonardo da Vinci".to_string()),
            category: Some(2),
            difficulty: Some(3),
        }
    }

    fn blank_field(draft: QuestionDraft) -> QuestionField {
        match draft.validate() {
            Err(CatalogError::BlankField { field }) => field,
            other => panic!("expected blank field error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_draft() {
        let new_question = draft().validate().unwrap();
        assert_eq!(
            new_question,
            NewQuestion {
                question: "Who painted the Mona Lisa?".to_string(),
                answer: "Leonardo da Vinci".to_string(),
                category: 2,
                difficulty: 3,
            }
        );
    }

    #[test]
    fn test_empty_question_text() {
        let mut d = draft();
        d.question = Some(String::new());
        let err = d.validate().unwrap_err();
        assert_eq!(err.to_string(), "Question can not be blank");
    }

    #[test]
    fn test_each_missing_field_is_named() {
        assert_eq!(blank_field(QuestionDraft { question: None, ..draft() }), QuestionField::Question);
        assert_eq!(blank_field(QuestionDraft { answer: None, ..draft() }), QuestionField::Answer);
        assert_eq!(blank_field(QuestionDraft { category: None, ..draft() }), QuestionField::Category);
        assert_eq!(blank_field(QuestionDraft { difficulty: None, ..draft() }), QuestionField::Difficulty);
    }

    #[test]
    fn test_zero_difficulty_is_blank() {
        let d = QuestionDraft {
            difficulty: Some(0),
            ..draft()
        };
        assert_eq!(blank_field(d), QuestionField::Difficulty);
    }

    #[test]
    fn test_first_blank_field_wins() {
        assert_eq!(blank_field(QuestionDraft::default()), QuestionField::Question);
    }

    #[test]
    fn test_draft_accepts_numeric_strings() {
        let d: QuestionDraft = serde_json::from_value(serde_json::json!({
            "question": "Q",
            "answer": "A",
            "category": "4",
            "difficulty": 2
        }))
        .unwrap();
        assert_eq!(d.category, Some(4));
        assert_eq!(d.difficulty, Some(2));
    }

    #[test]
    fn test_draft_empty_string_category_is_blank() {
        let d: QuestionDraft = serde_json::from_value(serde_json::json!({
            "question": "Q",
            "answer": "A",
            "category": "",
            "difficulty": 1
        }))
        .unwrap();
        assert_eq!(blank_field(d), QuestionField::Category);
    }

    #[test]
    fn test_draft_rejects_non_numeric_category() {
        let result: std::result::Result<QuestionDraft, _> = serde_json::from_value(serde_json::json!({
            "category": "science"
        }));
        assert!(result.is_err());
    }
}
