//! Shared favorites payloads.

use serde::{Deserialize, Serialize};

use crate::object_metadata::{ObjectId, ObjectMetadata};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteToggle {
    pub object_id: ObjectId,
    pub is_favorite: bool,
}

/// Favorites in the order they were saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FavoritesList {
    pub favorites: Vec<ObjectMetadata>,
}
