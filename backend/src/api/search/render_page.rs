//! Turns a result set and a session's position into one gallery page.

use common::{
    object_metadata::ObjectId,
    search_query::SearchQuery,
    search_result::{GalleryItem, SearchOutcome, SearchResultPage},
};

use crate::{
    remote_utils::{CollectionApi, ResultCache},
    session::{FavoritesStore, Session},
};

/// Expects `on_query_changed` to have run for `query` already.
pub(super) async fn render_page<C: CollectionApi>(
    cache: &ResultCache<C>,
    session: &mut Session,
    query: SearchQuery,
    object_ids: &[ObjectId],
) -> SearchOutcome {
    if object_ids.is_empty() {
        return SearchOutcome::NoResults { query };
    }

    let total_pages = session.pagination.total_pages(object_ids.len());
    // a result set refreshed after expiry can be shorter than the one the page was chosen from
    if session.pagination.current_page > total_pages {
        session.pagination.current_page = total_pages;
    }

    let visible_ids = session.pagination.visible_slice(object_ids);
    let items = fetch_gallery_items(cache, &session.favorites, visible_ids).await;

    SearchOutcome::Page(SearchResultPage {
        query,
        page_number: session.pagination.current_page,
        total_pages,
        total_results: object_ids.len() as u64,
        page_size: session.pagination.page_size.get(),
        items,
    })
}

async fn fetch_gallery_items<C: CollectionApi>(
    cache: &ResultCache<C>,
    favorites: &FavoritesStore,
    object_ids: &[ObjectId],
) -> Vec<GalleryItem> {
    let lookups = object_ids
        .iter()
        .map(|&object_id| async move { (object_id, cache.cached_get_object(object_id).await) });

    futures::future::join_all(lookups)
        .await
        .into_iter()
        .map(|(object_id, result)| {
            let is_favorite = favorites.contains(object_id);
            match result {
                Ok(metadata) => GalleryItem::loaded(object_id, metadata.as_ref().clone(), is_favorite),
                Err(e) => {
                    tracing::warn!("Failed to load object {}: {}", object_id, e);
                    GalleryItem::failed(object_id, e.to_string(), is_favorite)
                }
            }
        })
        .collect()
}
