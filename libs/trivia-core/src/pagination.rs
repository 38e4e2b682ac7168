//! Fixed-size pagination over the id-ordered question catalog.

use std::ops::Range;

use crate::error::{CatalogError, Result};

/// Number of questions on one page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageRequest {
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// Parse the raw `page` query value. Missing or non-numeric input falls
    /// back to the first page.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Index window `[start, end)` into the ordered sequence, or `None` when
    /// the page number is not positive.
    pub fn window(&self) -> Option<Range<usize>> {
        let index = usize::try_from(self.page.checked_sub(1)?).ok()?;
        let start = index.checked_mul(QUESTIONS_PER_PAGE)?;
        Some(start..start.saturating_add(QUESTIONS_PER_PAGE))
    }
}

/// One page of items plus the size of the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: i64,
    pub total: usize,
}

/// Slice `items` (already ordered by id) to the requested page.
///
/// An empty page is an error: nothing exists at that offset.
pub fn paginate<T>(items: &[T], request: PageRequest) -> Result<Page<'_, T>> {
    let out_of_range = || CatalogError::PageOutOfRange { page: request.page };

    let window = request.window().ok_or_else(out_of_range)?;
    if window.start >= items.len() {
        return Err(out_of_range());
    }
    let end = window.end.min(items.len());

    Ok(Page {
        items: &items[window.start..end],
        page: request.page,
        total: items.len(),
    })
}
