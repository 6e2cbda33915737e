//! Search endpoint for gallery pages.

use common::{search_query::SearchQuery, search_result::SearchOutcome};

use crate::{
    api::search::render_page::render_page,
    remote_utils::{CollectionApi, RemoteError, ResultCache},
    session::Session,
};

/// Runs `query` for one session and renders its current page.
///
/// An empty query is answered with [`SearchOutcome::Prompt`] without touching
/// the remote API or the session. A remote failure leaves the session as it
/// was.
pub async fn search_for_results<C: CollectionApi>(
    cache: &ResultCache<C>,
    session: &mut Session,
    query: SearchQuery,
) -> Result<SearchOutcome, RemoteError> {
    if query.is_empty() {
        return Ok(SearchOutcome::Prompt);
    }
    let object_ids = cache.cached_search(&query).await?;
    if session.pagination.on_query_changed(&query) {
        tracing::info!("New search {:?}: {} results", query.query_string, object_ids.len());
    }
    Ok(render_page(cache, session, query, &object_ids).await)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use common::{
        object_metadata::{ObjectId, ObjectMetadata},
        pagination::PageSize,
        search_query::ImageFilter,
        search_result::SearchResultPage,
    };

    use super::*;
    use crate::{api::search::{PageDirection, change_page}, testing::FakeCollection};

    const HOUR: Duration = Duration::from_secs(3600);

    fn query(text: &str) -> SearchQuery {
        SearchQuery::new(text, ImageFilter::RequireImages)
    }

    fn expect_page(outcome: SearchOutcome) -> SearchResultPage {
        match outcome {
            SearchOutcome::Page(page) => page,
            other => panic!("expected a page, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_query_prompts_without_remote_call() {
        let cache = ResultCache::new(FakeCollection::new(), HOUR);
        let mut session = Session::default();
        let outcome = search_for_results(&cache, &mut session, query("   ")).await.unwrap();
        assert_eq!(outcome, SearchOutcome::Prompt);
        assert_eq!(cache.client().search_calls(), 0);
        assert_eq!(cache.client().object_calls(), 0);
    }

    #[tokio::test]
    async fn zero_results_is_not_an_error() {
        let cache = ResultCache::new(FakeCollection::new(), HOUR);
        let mut session = Session::default();
        let outcome = search_for_results(&cache, &mut session, query("qwxzzy")).await.unwrap();
        assert_eq!(outcome, SearchOutcome::NoResults { query: query("qwxzzy") });
    }

    #[tokio::test]
    async fn remote_failure_surfaces_and_keeps_session() {
        let fake = FakeCollection::new().with_numbered_search("monet", 50);
        fake.set_search_failure(true);
        let cache = ResultCache::new(fake, HOUR);
        let mut session = Session::default();
        session.pagination.on_query_changed(&query("degas"));
        session.pagination.current_page = 2;
        let before = session.pagination.clone();

        assert!(search_for_results(&cache, &mut session, query("monet")).await.is_err());
        assert_eq!(session.pagination, before);

        cache.client().set_search_failure(false);
        let page = expect_page(search_for_results(&cache, &mut session, query("monet")).await.unwrap());
        assert_eq!(page.page_number, 1);
    }

    #[tokio::test]
    async fn vermeer_pages_through_29_results() {
        let cache = ResultCache::new(FakeCollection::new().with_numbered_search("vermeer", 29), HOUR);
        let mut session = Session::new(PageSize::new(12).unwrap());

        let first = expect_page(search_for_results(&cache, &mut session, query("vermeer")).await.unwrap());
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_results, 29);
        assert_eq!(first.items.len(), 12);
        assert_eq!(first.object_ids(), (1..=12).map(ObjectId).collect::<Vec<_>>());
        assert_eq!(cache.client().last_image_filter(), Some(ImageFilter::RequireImages));

        change_page(&cache, &mut session, query("vermeer"), PageDirection::Next).await.unwrap();
        let third = expect_page(change_page(&cache, &mut session, query("vermeer"), PageDirection::Next).await.unwrap());
        assert_eq!(third.page_number, 3);
        assert_eq!(third.object_ids(), (25..=29).map(ObjectId).collect::<Vec<_>>());

        let still_third = expect_page(change_page(&cache, &mut session, query("vermeer"), PageDirection::Next).await.unwrap());
        assert_eq!(still_third.page_number, 3);
        assert_eq!(still_third.items.len(), 5);
        assert_eq!(cache.client().search_calls(), 1);
    }

    #[tokio::test]
    async fn new_query_starts_on_the_first_page() {
        let fake = FakeCollection::new().with_numbered_search("monet", 50).with_numbered_search("renoir", 10);
        let cache = ResultCache::new(fake, HOUR);
        let mut session = Session::default();

        search_for_results(&cache, &mut session, query("monet")).await.unwrap();
        let second = expect_page(change_page(&cache, &mut session, query("monet"), PageDirection::Next).await.unwrap());
        assert_eq!(second.page_number, 2);

        let renoir = expect_page(search_for_results(&cache, &mut session, query("renoir")).await.unwrap());
        assert_eq!(renoir.page_number, 1);
        assert_eq!(renoir.total_pages, 1);
        assert_eq!(renoir.items.len(), 10);
        assert_eq!(session.pagination.last_query, query("renoir"));
    }

    #[tokio::test]
    async fn repeating_a_search_keeps_the_page() {
        let cache = ResultCache::new(FakeCollection::new().with_numbered_search("monet", 50), HOUR);
        let mut session = Session::default();
        search_for_results(&cache, &mut session, query("monet")).await.unwrap();
        change_page(&cache, &mut session, query("monet"), PageDirection::Next).await.unwrap();

        let again = expect_page(search_for_results(&cache, &mut session, query("monet")).await.unwrap());
        assert_eq!(again.page_number, 2);
        assert_eq!(again.object_ids().first(), Some(&ObjectId(13)));
    }

    #[tokio::test]
    async fn failed_object_lookup_only_degrades_its_tile() {
        let fake = FakeCollection::new().with_numbered_search("rembrandt", 3).with_failing_object(ObjectId(2));
        let cache = ResultCache::new(fake, HOUR);
        let mut session = Session::default();
        session.favorites.add(ObjectId(3), FakeCollection::generated_object(ObjectId(3)));

        let page = expect_page(search_for_results(&cache, &mut session, query("rembrandt")).await.unwrap());
        assert_eq!(page.object_ids(), vec![ObjectId(1), ObjectId(2), ObjectId(3)]);
        assert!(page.items[0].metadata.is_some());
        assert!(page.items[1].metadata.is_none());
        assert!(page.items[1].error.is_some());
        assert!(page.items[2].is_favorite);
        assert!(!page.items[0].is_favorite);
    }

    #[tokio::test]
    async fn tiles_keep_the_requested_id() {
        let record_without_id = ObjectMetadata { title: "Armor".to_string(), ..Default::default() };
        let fake = FakeCollection::new()
            .with_search("armor", vec![ObjectId(5)])
            .with_object_at(ObjectId(5), record_without_id);
        let cache = ResultCache::new(fake, HOUR);
        let mut session = Session::default();

        let page = expect_page(search_for_results(&cache, &mut session, query("armor")).await.unwrap());
        assert_eq!(page.object_ids(), vec![ObjectId(5)]);
        assert_eq!(page.items[0].metadata.as_ref().map(|m| m.title.as_str()), Some("Armor"));
    }

    #[tokio::test]
    async fn stale_page_is_pulled_back_into_range() {
        let cache = ResultCache::new(FakeCollection::new().with_numbered_search("hokusai", 14), HOUR);
        let mut session = Session::new(PageSize::new(6).unwrap());
        session.pagination.on_query_changed(&query("hokusai"));
        session.pagination.current_page = 5;

        let page = expect_page(search_for_results(&cache, &mut session, query("hokusai")).await.unwrap());
        assert_eq!(page.page_number, 3);
        assert_eq!(page.items.len(), 2);
    }
}
