//! Shared artwork metadata models.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier issued by the collection API for one artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ObjectId {
    fn from(value: u64) -> Self {
        ObjectId(value)
    }
}

/// Detail record of one artwork, named after the remote JSON fields. Fields
/// without a named counterpart are kept in `extra`, so an exported favorite
/// carries the whole record the API returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectMetadata {
    #[serde(rename = "objectID")]
    pub object_id: ObjectId,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist_display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist_display_bio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub medium: String,
    #[serde(deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(deserialize_with = "null_as_default")]
    pub culture: String,
    #[serde(deserialize_with = "null_as_default")]
    pub credit_line: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_public_domain: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_image_small: String,
    #[serde(rename = "objectURL", deserialize_with = "null_as_default")]
    pub object_url: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// the API sends `null` for some fields on older records
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ObjectMetadata {
    pub fn display_title(&self) -> &str {
        non_empty_or(&self.title, "Untitled")
    }

    pub fn display_artist(&self) -> &str {
        non_empty_or(&self.artist_display_name, "Unknown")
    }

    pub fn display_date(&self) -> &str {
        non_empty_or(&self.object_date, "Unknown")
    }

    /// Gallery thumbnail: the small rendition first, then the full image.
    pub fn thumbnail_url(&self) -> Option<&str> {
        [&self.primary_image_small, &self.primary_image]
            .into_iter()
            .map(|url| url.trim())
            .find(|url| !url.is_empty())
    }

}

pub fn image_download_filename(object_id: ObjectId) -> String {
    format!("met_{}.jpg", object_id)
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}
