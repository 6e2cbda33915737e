use axum::{
    extract::{Path, State},
    response::Response,
};
use backend::{api::objects::get_object_details, remote_utils::CollectionApi, session::SessionId, state::AppState};
use common::{object_metadata::ObjectId, search_result::ObjectDetails};

use crate::routes::json_or_error;

async fn _object_details<C: CollectionApi>(state: AppState<C>, session_id: SessionId, object_id: ObjectId) -> anyhow::Result<ObjectDetails> {
    let session = state.session(session_id)?;
    let session = session.lock().await;
    Ok(get_object_details(&state.cache, &session, object_id).await?)
}

pub async fn object_details<C: CollectionApi + 'static>(
    State(state): State<AppState<C>>,
    Path((session_id, object_id)): Path<(SessionId, ObjectId)>,
) -> Response {
    json_or_error("object_details", _object_details(state, session_id, object_id).await)
}
