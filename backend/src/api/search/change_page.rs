//! Previous / next navigation and the page size selector.

use common::{pagination::PageSize, search_query::SearchQuery, search_result::SearchOutcome};
use serde::{Deserialize, Serialize};

use crate::{
    api::search::render_page::render_page,
    remote_utils::{CollectionApi, RemoteError, ResultCache},
    session::Session,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageDirection {
    Previous,
    Next,
}

/// Moves one page in `direction` and renders it. Moving past either end is
/// a no-op that re-renders the current page.
pub async fn change_page<C: CollectionApi>(
    cache: &ResultCache<C>,
    session: &mut Session,
    query: SearchQuery,
    direction: PageDirection,
) -> Result<SearchOutcome, RemoteError> {
    if query.is_empty() {
        return Ok(SearchOutcome::Prompt);
    }
    let object_ids = cache.cached_search(&query).await?;
    session.pagination.on_query_changed(&query);
    let total_pages = session.pagination.total_pages(object_ids.len());
    let moved = match direction {
        PageDirection::Previous => session.pagination.previous(),
        PageDirection::Next => session.pagination.next(total_pages),
    };
    tracing::debug!("change_page {:?}: moved={} page={}/{}", direction, moved, session.pagination.current_page, total_pages);
    Ok(render_page(cache, session, query, &object_ids).await)
}

/// Applies the "results per page" selector; a new size starts over on page 1.
pub fn change_page_size(session: &mut Session, page_size: PageSize) {
    session.pagination.set_page_size(page_size);
}
