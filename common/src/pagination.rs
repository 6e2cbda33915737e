//! Pagination over an ordered result set.
//!
//! The slice helpers never clamp: callers guard the page number before
//! slicing, and an out-of-range page simply yields an empty slice.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{search_const::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS}, search_query::SearchQuery};

/// `ceil(result_set_size / page_size)`, and 0 for an empty result set.
pub fn compute_total_pages(result_set_size: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    result_set_size.div_ceil(page_size)
}

/// The 1-based `page` of `result_set`, in result order.
pub fn compute_visible_slice<T>(result_set: &[T], page_size: u64, page: u64) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    let start = usize::try_from(start).unwrap_or(usize::MAX);
    if start >= result_set.len() {
        return &[];
    }
    let page_size = usize::try_from(page_size).unwrap_or(usize::MAX);
    let end = start.saturating_add(page_size).min(result_set.len());
    &result_set[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page size {0} is not one of 6, 9, 12 or 18")]
pub struct InvalidPageSize(pub u64);

/// One of the sizes offered by the "results per page" selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PageSize(u64);

impl PageSize {
    pub fn new(size: u64) -> Result<Self, InvalidPageSize> {
        if PAGE_SIZE_OPTIONS.contains(&size) {
            Ok(PageSize(size))
        } else {
            Err(InvalidPageSize(size))
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(DEFAULT_PAGE_SIZE)
    }
}

impl TryFrom<u64> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        PageSize::new(value)
    }
}

impl From<PageSize> for u64 {
    fn from(value: PageSize) -> Self {
        value.0
    }
}

/// Per-session pagination position.
///
/// `current_page` is 1-based. Whenever the active query differs from
/// `last_query` the position goes back to page 1, which keeps a stale page
/// number from a larger, earlier result set out of the slice computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: u64,
    pub page_size: PageSize,
    pub last_query: SearchQuery,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl PaginationState {
    pub fn new(page_size: PageSize) -> Self {
        Self { current_page: 1, page_size, last_query: SearchQuery::default() }
    }

    /// Returns `true` when the query changed and the page was reset.
    pub fn on_query_changed(&mut self, new_query: &SearchQuery) -> bool {
        if *new_query == self.last_query {
            return false;
        }
        self.current_page = 1;
        self.last_query = new_query.clone();
        true
    }

    /// Moves back one page; a no-op on the first page.
    pub fn previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            return true;
        }
        false
    }

    /// Moves forward one page; a no-op on the last page.
    pub fn next(&mut self, total_pages: u64) -> bool {
        if self.current_page < total_pages {
            self.current_page += 1;
            return true;
        }
        false
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        if page_size != self.page_size {
            self.page_size = page_size;
            self.current_page = 1;
        }
    }

    pub fn total_pages(&self, result_set_size: usize) -> u64 {
        compute_total_pages(result_set_size as u64, self.page_size.get())
    }

    pub fn visible_slice<'a, T>(&self, result_set: &'a [T]) -> &'a [T] {
        compute_visible_slice(result_set, self.page_size.get(), self.current_page)
    }
}
