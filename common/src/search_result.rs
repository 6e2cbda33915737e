use serde::{Deserialize, Serialize};

use crate::{object_metadata::{ObjectId, ObjectMetadata}, search_query::SearchQuery};


/// Result of one search interaction, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// No search text yet: show the "enter a search term" prompt.
    Prompt,
    /// The search succeeded with zero results.
    NoResults { query: SearchQuery },
    Page(SearchResultPage),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultPage {
    pub query: SearchQuery,
    pub page_number: u64,
    pub total_pages: u64,
    pub total_results: u64,
    pub page_size: u64,
    pub items: Vec<GalleryItem>,
}

impl SearchResultPage {
    pub fn object_ids(&self) -> Vec<ObjectId> {
        self.items.iter().map(|item| item.object_id).collect()
    }
}

/// One gallery tile. A failed detail lookup only degrades its own tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub object_id: ObjectId,
    pub metadata: Option<ObjectMetadata>,
    pub error: Option<String>,
    pub is_favorite: bool,
}

impl GalleryItem {
    /// The tile keeps the id it was requested under, whatever the record says.
    pub fn loaded(object_id: ObjectId, metadata: ObjectMetadata, is_favorite: bool) -> Self {
        Self { object_id, metadata: Some(metadata), error: None, is_favorite }
    }

    pub fn failed(object_id: ObjectId, error: impl Into<String>, is_favorite: bool) -> Self {
        Self { object_id, metadata: None, error: Some(error.into()), is_favorite }
    }
}

/// Detail view of one object, with the label state of its favorite toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDetails {
    pub metadata: ObjectMetadata,
    pub is_favorite: bool,
}
