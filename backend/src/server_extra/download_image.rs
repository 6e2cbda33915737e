use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::object_metadata::ObjectId;
use tracing::info;

use crate::{
    api::objects::download_image,
    remote_utils::CollectionApi,
    server_extra::{attachment_headers, error_response},
    state::AppState,
};

async fn _download_image<C: CollectionApi>(state: AppState<C>, object_id: ObjectId) -> anyhow::Result<Response> {
    info!("Downloading image: {}", object_id);
    let Some(image) = download_image(&state.cache, object_id).await? else {
        return Ok((StatusCode::NOT_FOUND, Body::from("no image available")).into_response());
    };
    let headers = attachment_headers(image.content_type, &image.filename);
    Ok((headers, Body::from(image.data)).into_response())
}

pub async fn download_image_handler<C: CollectionApi + 'static>(
    State(state): State<AppState<C>>,
    Path(object_id): Path<ObjectId>,
) -> Response {
    match _download_image(state, object_id).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("download_image: request failed: {:#?}", e);
            error_response(e)
        }
    }
}
