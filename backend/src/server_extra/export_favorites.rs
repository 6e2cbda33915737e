use axum::{
    body::Body,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::{
    api::favorites::export_favorites,
    remote_utils::CollectionApi,
    server_extra::{attachment_headers, error_response},
    session::SessionId,
    state::AppState,
};

async fn _export_favorites<C: CollectionApi>(state: AppState<C>, session_id: SessionId) -> anyhow::Result<Response> {
    let session = state.session(session_id)?;
    let export = {
        let session = session.lock().await;
        info!("Exporting {} favorites for session {}", session.favorites.len(), session_id);
        export_favorites(&session)?
    };
    let headers = attachment_headers(export.content_type, export.filename);
    Ok((headers, Body::from(export.body)).into_response())
}

pub async fn export_favorites_handler<C: CollectionApi + 'static>(
    State(state): State<AppState<C>>,
    Path(session_id): Path<SessionId>,
) -> Response {
    match _export_favorites(state, session_id).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("export_favorites: request failed: {:#?}", e);
            error_response(e)
        }
    }
}
