//! Random selection of the next quiz question.
//!
//! The caller owns the round: it accumulates the ids it has already shown and
//! resends them with every request. Selection itself is stateless.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{deserialize_int, CategoryId, CategoryMap, Question, QuestionId};

/// Category constraint sent by quiz clients, e.g. `{"type": "Science", "id": 1}`.
///
/// Clients use an id that matches no category (conventionally `0`, labelled
/// "click" or "All") to mean "any category".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_int")]
    pub id: CategoryId,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Body of a quiz request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<QuestionId>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    pub fn seen(&self) -> HashSet<QuestionId> {
        self.previous_questions
            .iter()
            .flatten()
            .copied()
            .collect()
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.quiz_category.as_ref().map(|c| c.id)
    }
}

/// Outcome of one selection step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizSelection<'a> {
    /// A question, and how many candidates were left including it.
    Question { question: &'a Question, remaining: usize },
    /// Every candidate has been seen; the round is over.
    Exhausted,
}

impl<'a> QuizSelection<'a> {
    pub fn question(&self) -> Option<&'a Question> {
        match self {
            Self::Question { question, .. } => Some(*question),
            Self::Exhausted => None,
        }
    }

    pub fn remaining(&self) -> usize {
        match self {
            Self::Question { remaining, .. } => *remaining,
            Self::Exhausted => 0,
        }
    }
}

/// Pick one unseen question uniformly at random.
///
/// A category constraint only applies when it names a category in
/// `categories`; otherwise the whole unseen pool is used.
pub fn select_question<'a, R: Rng + ?Sized>(
    questions: &'a [Question],
    categories: &CategoryMap,
    seen: &HashSet<QuestionId>,
    category: Option<CategoryId>,
    rng: &mut R,
) -> QuizSelection<'a> {
    let category = category.filter(|id| categories.contains_key(id));

    let pool: Vec<&Question> = questions
        .iter()
        .filter(|q| !seen.contains(&q.id))
        .filter(|q| category.map_or(true, |id| q.category == id))
        .collect();

    match pool.choose(rng).copied() {
        Some(question) => QuizSelection::Question {
            question,
            remaining: pool.len(),
        },
        None => QuizSelection::Exhausted,
    }
}
