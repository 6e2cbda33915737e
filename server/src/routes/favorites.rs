//! Favorites routes; the JSON export lives with the other downloads in
//! `backend::server_extra`.

use axum::{
    extract::{Path, State},
    response::Response,
};
use backend::{
    api::favorites::{clear_favorites, list_favorites, toggle_favorite},
    remote_utils::CollectionApi,
    session::SessionId,
    state::AppState,
};
use common::{
    favorites::{FavoriteToggle, FavoritesList},
    object_metadata::ObjectId,
};
use serde::{Deserialize, Serialize};

use crate::routes::json_or_error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritesCleared {
    pub cleared: usize,
}

async fn _list<C: CollectionApi>(state: AppState<C>, session_id: SessionId) -> anyhow::Result<FavoritesList> {
    let session = state.session(session_id)?;
    let session = session.lock().await;
    Ok(list_favorites(&session))
}

pub async fn list<C: CollectionApi + 'static>(State(state): State<AppState<C>>, Path(session_id): Path<SessionId>) -> Response {
    json_or_error("list_favorites", _list(state, session_id).await)
}

async fn _toggle<C: CollectionApi>(state: AppState<C>, session_id: SessionId, object_id: ObjectId) -> anyhow::Result<FavoriteToggle> {
    let session = state.session(session_id)?;
    let mut session = session.lock().await;
    Ok(toggle_favorite(&state.cache, &mut session, object_id).await?)
}

pub async fn toggle<C: CollectionApi + 'static>(
    State(state): State<AppState<C>>,
    Path((session_id, object_id)): Path<(SessionId, ObjectId)>,
) -> Response {
    json_or_error("toggle_favorite", _toggle(state, session_id, object_id).await)
}

async fn _clear<C: CollectionApi>(state: AppState<C>, session_id: SessionId) -> anyhow::Result<FavoritesCleared> {
    let session = state.session(session_id)?;
    let mut session = session.lock().await;
    Ok(FavoritesCleared { cleared: clear_favorites(&mut session) })
}

pub async fn clear<C: CollectionApi + 'static>(State(state): State<AppState<C>>, Path(session_id): Path<SessionId>) -> Response {
    json_or_error("clear_favorites", _clear(state, session_id).await)
}
