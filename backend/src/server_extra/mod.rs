//! Axum handlers that answer with file downloads rather than JSON, plus the
//! error mapping every handler shares.

pub mod download_image;
pub mod export_favorites;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::pagination::InvalidPageSize;
use serde_json::json;

use crate::{remote_utils::RemoteError, session::SessionError};

/// Status code for a failed request: remote failures are a bad gateway,
/// unknown sessions are not found, invalid input is a bad request.
pub fn error_status(e: &anyhow::Error) -> StatusCode {
    if e.downcast_ref::<RemoteError>().is_some() {
        StatusCode::BAD_GATEWAY
    } else if e.downcast_ref::<SessionError>().is_some() {
        StatusCode::NOT_FOUND
    } else if e.downcast_ref::<InvalidPageSize>().is_some() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub fn error_response(e: anyhow::Error) -> Response {
    let status = error_status(&e);
    (status, Json(json!({ "error": e.to_string() }))).into_response()
}

fn attachment_headers(content_type: &str, filename: &str) -> [(String, String); 2] {
    [
        ("Content-Type".to_string(), content_type.to_string()),
        ("Content-Disposition".to_string(), format!("attachment; filename=\"{}\"", filename)),
    ]
}
