//! Shared search query models and helpers.

use serde::{Deserialize, Serialize};

/// Image-presence filter forwarded to the remote search as `hasImages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImageFilter {
    #[default]
    RequireImages,
    ExcludeImages,
    NoFilter,
}

impl ImageFilter {
    /// Value of the `hasImages` parameter, `None` when it must be omitted.
    pub fn has_images_param(&self) -> Option<&'static str> {
        match self {
            ImageFilter::RequireImages => Some("true"),
            ImageFilter::ExcludeImages => Some("false"),
            ImageFilter::NoFilter => None,
        }
    }

    /// Maps the "only show artworks with images" checkbox.
    pub fn from_only_with_images(only_with_images: bool) -> Self {
        if only_with_images {
            ImageFilter::RequireImages
        } else {
            ImageFilter::NoFilter
        }
    }
}

/// Identity key for one search: the text plus the image filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub query_string: String,
    pub image_filter: ImageFilter,
}

impl SearchQuery {
    pub fn new(query_string: impl Into<String>, image_filter: ImageFilter) -> Self {
        let query_string: String = query_string.into();
        Self { query_string: query_string.trim().to_string(), image_filter }
    }

    /// Empty queries never reach the remote API.
    pub fn is_empty(&self) -> bool {
        self.query_string.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_images_param_follows_filter() {
        assert_eq!(ImageFilter::RequireImages.has_images_param(), Some("true"));
        assert_eq!(ImageFilter::ExcludeImages.has_images_param(), Some("false"));
        assert_eq!(ImageFilter::NoFilter.has_images_param(), None);
    }

    #[test]
    fn checkbox_maps_to_require_or_no_filter() {
        assert_eq!(ImageFilter::from_only_with_images(true), ImageFilter::RequireImages);
        assert_eq!(ImageFilter::from_only_with_images(false), ImageFilter::NoFilter);
    }

    #[test]
    fn whitespace_only_query_is_empty() {
        assert!(SearchQuery::new("   ", ImageFilter::NoFilter).is_empty());
        assert!(SearchQuery::default().is_empty());
        let query = SearchQuery::new("  van gogh ", ImageFilter::RequireImages);
        assert_eq!(query.query_string, "van gogh");
        assert!(!query.is_empty());
    }

    #[test]
    fn filter_is_part_of_query_identity() {
        let with_images = SearchQuery::new("monet", ImageFilter::RequireImages);
        let any = SearchQuery::new("monet", ImageFilter::NoFilter);
        assert_ne!(with_images, any);
    }
}
