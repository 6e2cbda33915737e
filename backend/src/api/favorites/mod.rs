//! Favorites operations: toggle, list, clear and export.

mod toggle_favorite;
pub use toggle_favorite::toggle_favorite;

mod list_favorites;
pub use list_favorites::{clear_favorites, list_favorites};

mod export_favorites;
pub use export_favorites::{FavoritesExport, export_favorites};
