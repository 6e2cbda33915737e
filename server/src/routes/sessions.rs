//! Session lifecycle routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use backend::{remote_utils::CollectionApi, server_extra::error_response, session::SessionId, state::AppState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCreated {
    pub session_id: SessionId,
}

pub async fn create_session<C: CollectionApi + 'static>(State(state): State<AppState<C>>) -> Response {
    let session_id = state.sessions.create();
    (StatusCode::CREATED, Json(SessionCreated { session_id })).into_response()
}

pub async fn end_session<C: CollectionApi + 'static>(
    State(state): State<AppState<C>>,
    Path(session_id): Path<SessionId>,
) -> Response {
    match state.sessions.remove(session_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e.into()),
    }
}
