//! Favorites saved during one session.

use common::object_metadata::{ObjectId, ObjectMetadata};
use indexmap::IndexMap;

/// Favorites keyed by object id, iterated in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesStore {
    entries: IndexMap<ObjectId, ObjectMetadata>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites; an overwrite keeps the original position.
    pub fn add(&mut self, object_id: ObjectId, metadata: ObjectMetadata) {
        self.entries.insert(object_id, metadata);
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, object_id: ObjectId) -> bool {
        self.entries.shift_remove(&object_id).is_some()
    }

    /// Adds when absent, removes when present. Returns `true` when the
    /// object is a favorite afterwards.
    pub fn toggle(&mut self, object_id: ObjectId, metadata: ObjectMetadata) -> bool {
        if self.remove(object_id) {
            return false;
        }
        self.add(object_id, metadata);
        true
    }

    pub fn contains(&self, object_id: ObjectId) -> bool {
        self.entries.contains_key(&object_id)
    }

    pub fn get(&self, object_id: ObjectId) -> Option<&ObjectMetadata> {
        self.entries.get(&object_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectMetadata> {
        self.entries.values()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// JSON array of the stored records, pretty-printed with 2-space indent.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let records: Vec<&ObjectMetadata> = self.iter().collect();
        serde_json::to_string_pretty(&records)
    }
}
