//! Time-bounded memoization of the remote lookups.
//!
//! Entries expire purely by age; nothing is evicted explicitly. Two
//! concurrent fills of the same key may both reach the remote API, the last
//! one to finish wins.

use std::{
    collections::HashMap,
    future::Future,
    hash::Hash,
    sync::{Arc, PoisonError, RwLock},
    time::{Duration, Instant},
};

use bytes::Bytes;
use common::{
    object_metadata::{ObjectId, ObjectMetadata},
    search_query::SearchQuery,
};

use crate::remote_utils::{met_client::CollectionApi, remote_error::RemoteError};

struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// Keyed store whose entries are valid for `ttl` after insertion.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: RwLock::new(HashMap::new()) }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The stored value, unless it is older than the validity window.
    pub fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(key)?;
        if entry.inserted_at.elapsed() < self.ttl {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    pub fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key, CacheEntry { value, inserted_at: Instant::now() });
    }

    /// Returns the fresh cached value or runs `fill`, storing its value.
    /// Errors are returned as-is and never stored.
    pub async fn get_or_try_insert_with<F, Fut, E>(&self, key: K, fill: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }
        let value = fill().await?;
        self.insert(key, value.clone());
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Memoizing front of a [`CollectionApi`], shared by every session.
pub struct ResultCache<C> {
    client: C,
    searches: TtlCache<SearchQuery, Arc<Vec<ObjectId>>>,
    objects: TtlCache<ObjectId, Arc<ObjectMetadata>>,
}

impl<C: CollectionApi> ResultCache<C> {
    pub fn new(client: C, ttl: Duration) -> Self {
        Self { client, searches: TtlCache::new(ttl), objects: TtlCache::new(ttl) }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn cached_search(&self, query: &SearchQuery) -> Result<Arc<Vec<ObjectId>>, RemoteError> {
        if query.is_empty() {
            return Ok(Arc::default());
        }
        self.searches
            .get_or_try_insert_with(query.clone(), || async {
                tracing::debug!("SEARCH CACHE MISS: {:?}", query);
                self.client.search(query).await.map(Arc::new)
            })
            .await
    }

    pub async fn cached_get_object(&self, object_id: ObjectId) -> Result<Arc<ObjectMetadata>, RemoteError> {
        self.objects
            .get_or_try_insert_with(object_id, || async {
                tracing::debug!("OBJECT CACHE MISS: {}", object_id);
                self.client.get_object(object_id).await.map(Arc::new)
            })
            .await
    }

    /// Image bytes are never cached.
    pub async fn fetch_image_bytes(&self, url: &str) -> Option<Bytes> {
        self.client.fetch_image_bytes(url).await
    }

    pub fn cached_search_count(&self) -> usize {
        self.searches.len()
    }

    pub fn cached_object_count(&self) -> usize {
        self.objects.len()
    }
}

#[cfg(test)]
mod tests {
    use common::search_query::ImageFilter;

    use super::*;
    use crate::testing::FakeCollection;

    const HOUR: Duration = Duration::from_secs(3600);

    #[tokio::test]
    async fn repeated_object_lookups_hit_the_remote_once() {
        let cache = ResultCache::new(FakeCollection::new(), HOUR);
        let first = cache.cached_get_object(ObjectId(42)).await.unwrap();
        let second = cache.cached_get_object(ObjectId(42)).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.client().object_calls(), 1);
        assert_eq!(cache.cached_object_count(), 1);
    }

    #[tokio::test]
    async fn searches_are_keyed_by_text_and_filter() {
        let fake = FakeCollection::new().with_search("monet", (1..=5).map(ObjectId).collect());
        let cache = ResultCache::new(fake, HOUR);
        let with_images = SearchQuery::new("monet", ImageFilter::RequireImages);
        let any = SearchQuery::new("monet", ImageFilter::NoFilter);

        cache.cached_search(&with_images).await.unwrap();
        cache.cached_search(&with_images).await.unwrap();
        assert_eq!(cache.client().search_calls(), 1);

        let ids = cache.cached_search(&any).await.unwrap();
        assert_eq!(cache.client().search_calls(), 2);
        assert_eq!(ids.len(), 5);
        assert_eq!(cache.cached_search_count(), 2);
    }

    #[tokio::test]
    async fn empty_query_is_neither_sent_nor_stored() {
        let cache = ResultCache::new(FakeCollection::new(), HOUR);
        let ids = cache.cached_search(&SearchQuery::new("", ImageFilter::RequireImages)).await.unwrap();
        assert!(ids.is_empty());
        assert_eq!(cache.client().search_calls(), 0);
        assert_eq!(cache.cached_search_count(), 0);
    }

    #[tokio::test]
    async fn expired_entries_are_refetched() {
        let cache = ResultCache::new(FakeCollection::new(), Duration::ZERO);
        cache.cached_get_object(ObjectId(7)).await.unwrap();
        cache.cached_get_object(ObjectId(7)).await.unwrap();
        assert_eq!(cache.client().object_calls(), 2);
        assert_eq!(cache.cached_object_count(), 1);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let fake = FakeCollection::new().with_failing_object(ObjectId(9));
        let cache = ResultCache::new(fake, HOUR);
        assert!(cache.cached_get_object(ObjectId(9)).await.is_err());
        assert!(cache.cached_get_object(ObjectId(9)).await.is_err());
        assert_eq!(cache.client().object_calls(), 2);
        assert!(cache.objects.is_empty());
    }

    #[tokio::test]
    async fn concurrent_fills_store_a_single_entry() {
        let cache = Arc::new(ResultCache::new(FakeCollection::new(), HOUR));
        let lookups = (0..8).map(|_| {
            let cache = cache.clone();
            tokio::spawn(async move { cache.cached_get_object(ObjectId(3)).await.unwrap() })
        });
        let results = futures::future::join_all(lookups).await;
        let first = results[0].as_ref().unwrap().clone();
        for result in results {
            assert_eq!(result.unwrap(), first);
        }
        assert_eq!(cache.cached_object_count(), 1);
        assert!(cache.client().object_calls() >= 1);
    }

    #[test]
    fn ttl_cache_overwrites_on_insert() {
        let cache: TtlCache<&str, u32> = TtlCache::new(HOUR);
        assert_eq!(cache.get(&"a"), None);
        cache.insert("a", 1);
        cache.insert("a", 2);
        assert_eq!(cache.get(&"a"), Some(2));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.ttl(), HOUR);
    }
}
