//! Case-insensitive substring search over question text.

use crate::error::{CatalogError, Result};
use crate::types::Question;

/// A non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// `None` when no search was requested (absent or empty term).
    pub fn new(raw: Option<String>) -> Option<Self> {
        raw.filter(|s| !s.is_empty()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Every question whose text contains `term`, ignoring case, in store order.
pub fn search<'a>(questions: &'a [Question], term: &SearchTerm) -> Result<Vec<&'a Question>> {
    let folded = term.as_str().to_lowercase();
    let found: Vec<&Question> = questions
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&folded))
        .collect();

    if found.is_empty() {
        return Err(CatalogError::NoSearchMatches {
            term: term.as_str().to_string(),
        });
    }
    Ok(found)
}
