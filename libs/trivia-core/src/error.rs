//! Error types for trivia-core.

use thiserror::Error;

use crate::types::{CategoryId, QuestionId};
use crate::validation::QuestionField;

/// Result type alias using CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// How a failure should be surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input; the operation was not attempted.
    CallerError,
    /// A well-formed query matched nothing.
    NotFound,
}

/// Errors produced by the selection core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("resource not found")]
    PageOutOfRange { page: i64 },

    #[error("no questions contains the search string \"{term}\"")]
    NoSearchMatches { term: String },

    #[error("Category with ID {id} does not exist")]
    UnknownCategory { id: CategoryId },

    #[error("Category with ID {id} has no question")]
    EmptyCategory { id: CategoryId },

    #[error("Question with id {id} does not exist.")]
    QuestionNotFound { id: QuestionId },

    #[error("{field} can not be blank")]
    BlankField { field: QuestionField },
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PageOutOfRange { .. }
            | Self::NoSearchMatches { .. }
            | Self::QuestionNotFound { .. } => ErrorKind::NotFound,
            Self::UnknownCategory { .. } | Self::EmptyCategory { .. } | Self::BlankField { .. } => {
                ErrorKind::CallerError
            }
        }
    }
}
