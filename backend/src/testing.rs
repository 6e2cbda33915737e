//! In-memory [`CollectionApi`] with call counters, for tests.

use std::{
    collections::{HashMap, HashSet},
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use bytes::Bytes;
use common::{
    object_metadata::{ObjectId, ObjectMetadata},
    search_query::{ImageFilter, SearchQuery},
};
use reqwest::StatusCode;

use crate::remote_utils::{CollectionApi, RemoteError};

/// Searches are keyed by query text; objects without an explicit record get
/// a generated one titled `Object <id>`.
#[derive(Default)]
pub struct FakeCollection {
    searches: HashMap<String, Vec<ObjectId>>,
    objects: HashMap<ObjectId, ObjectMetadata>,
    failing_objects: HashSet<ObjectId>,
    images: HashMap<String, Bytes>,
    fail_searches: AtomicBool,
    search_calls: AtomicUsize,
    object_calls: AtomicUsize,
    image_calls: AtomicUsize,
    last_image_filter: Mutex<Option<ImageFilter>>,
}

impl FakeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query_string: &str, ids: Vec<ObjectId>) -> Self {
        self.searches.insert(query_string.to_string(), ids);
        self
    }

    /// A search for `query_string` answering ids `1..=count`.
    pub fn with_numbered_search(self, query_string: &str, count: u64) -> Self {
        self.with_search(query_string, (1..=count).map(ObjectId).collect())
    }

    pub fn with_object(self, metadata: ObjectMetadata) -> Self {
        self.with_object_at(metadata.object_id, metadata)
    }

    /// Serves `metadata` for `object_id` even when the record says otherwise.
    pub fn with_object_at(mut self, object_id: ObjectId, metadata: ObjectMetadata) -> Self {
        self.objects.insert(object_id, metadata);
        self
    }

    pub fn with_failing_object(mut self, object_id: ObjectId) -> Self {
        self.failing_objects.insert(object_id);
        self
    }

    pub fn with_image(mut self, url: &str, data: &'static [u8]) -> Self {
        self.images.insert(url.to_string(), Bytes::from_static(data));
        self
    }

    pub fn set_search_failure(&self, failing: bool) {
        self.fail_searches.store(failing, Ordering::SeqCst);
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn object_calls(&self) -> usize {
        self.object_calls.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }

    pub fn last_image_filter(&self) -> Option<ImageFilter> {
        *self.last_image_filter.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn generated_object(object_id: ObjectId) -> ObjectMetadata {
        ObjectMetadata {
            object_id,
            title: format!("Object {}", object_id),
            artist_display_name: "Fake Artist".to_string(),
            primary_image_small: format!("https://images.example/{}.jpg", object_id),
            object_url: format!("https://www.metmuseum.org/art/collection/search/{}", object_id),
            ..Default::default()
        }
    }

    fn failure(path: String) -> RemoteError {
        RemoteError::Status { url: format!("fake://{path}"), status: StatusCode::SERVICE_UNAVAILABLE }
    }
}

#[async_trait]
impl CollectionApi for FakeCollection {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<ObjectId>, RemoteError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_image_filter.lock().unwrap_or_else(PoisonError::into_inner) = Some(query.image_filter);
        if self.fail_searches.load(Ordering::SeqCst) {
            return Err(Self::failure("search".to_string()));
        }
        Ok(self.searches.get(query.query_string.trim()).cloned().unwrap_or_default())
    }

    async fn get_object(&self, object_id: ObjectId) -> Result<ObjectMetadata, RemoteError> {
        self.object_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_objects.contains(&object_id) {
            return Err(Self::failure(format!("objects/{object_id}")));
        }
        Ok(self.objects.get(&object_id).cloned().unwrap_or_else(|| Self::generated_object(object_id)))
    }

    async fn fetch_image_bytes(&self, url: &str) -> Option<Bytes> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        self.images.get(url).cloned()
    }
}
