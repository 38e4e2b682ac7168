//! Restricting the catalog to a single category.

use crate::error::{CatalogError, Result};
use crate::types::{CategoryId, CategoryMap, Question};

/// Questions of one category plus its label for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestions<'a> {
    pub questions: Vec<&'a Question>,
    pub current_category: String,
}

/// Questions whose category is `id`, ordered by id ascending.
pub fn filter_by_category<'a>(
    questions: &'a [Question],
    categories: &CategoryMap,
    id: CategoryId,
) -> Result<CategoryQuestions<'a>> {
    let label = categories
        .get(&id)
        .ok_or(CatalogError::UnknownCategory { id })?;

    let mut matched: Vec<&Question> = questions.iter().filter(|q| q.category == id).collect();
    if matched.is_empty() {
        return Err(CatalogError::EmptyCategory { id });
    }
    matched.sort_by_key(|q| q.id);

    Ok(CategoryQuestions {
        questions: matched,
        current_category: label.clone(),
    })
}
