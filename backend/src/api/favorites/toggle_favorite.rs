//! The favorite / unfavorite control.

use common::{favorites::FavoriteToggle, object_metadata::ObjectId};

use crate::{
    remote_utils::{CollectionApi, RemoteError, ResultCache},
    session::Session,
};

/// Saves the object's metadata when it is not a favorite yet, otherwise
/// removes it. Only an addition needs the (normally cached) metadata.
pub async fn toggle_favorite<C: CollectionApi>(
    cache: &ResultCache<C>,
    session: &mut Session,
    object_id: ObjectId,
) -> Result<FavoriteToggle, RemoteError> {
    let metadata = match session.favorites.get(object_id) {
        Some(metadata) => metadata.clone(),
        None => cache.cached_get_object(object_id).await?.as_ref().clone(),
    };
    let is_favorite = session.favorites.toggle(object_id, metadata);
    tracing::info!("Favorite {}: {}", object_id, if is_favorite { "saved" } else { "removed" });
    Ok(FavoriteToggle { object_id, is_favorite })
}
