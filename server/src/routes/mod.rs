//! JSON route handlers. Each handler wraps an inner `_handler` returning
//! `anyhow::Result` and maps failures through the shared error response.

pub mod favorites;
pub mod health;
pub mod objects;
pub mod search;
pub mod sessions;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use backend::server_extra::error_response;
use serde::Serialize;

pub(crate) fn json_or_error<T: Serialize>(handler: &str, result: anyhow::Result<T>) -> Response {
    match result {
        Ok(value) => Json(value).into_response(),
        Err(e) => {
            tracing::error!("{}: request failed: {:#?}", handler, e);
            error_response(e)
        }
    }
}
