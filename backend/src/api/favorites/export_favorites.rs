//! Favorites export as a downloadable JSON document.

use common::search_const::{FAVORITES_EXPORT_FILENAME, FAVORITES_EXPORT_MIME};

use crate::session::Session;

#[derive(Debug, Clone, PartialEq)]
pub struct FavoritesExport {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

pub fn export_favorites(session: &Session) -> serde_json::Result<FavoritesExport> {
    Ok(FavoritesExport {
        filename: FAVORITES_EXPORT_FILENAME,
        content_type: FAVORITES_EXPORT_MIME,
        body: session.favorites.export_json()?,
    })
}
