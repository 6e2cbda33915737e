//! Router assembly and the serve loop.

use anyhow::Context;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use backend::{
    remote_utils::CollectionApi,
    server_extra::{download_image::download_image_handler, export_favorites::export_favorites_handler},
    state::AppState,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{config::ServerConfig, routes};

pub fn router<C: CollectionApi + 'static>(state: AppState<C>) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/sessions", post(routes::sessions::create_session::<C>))
        .route("/api/sessions/{session_id}", delete(routes::sessions::end_session::<C>))
        .route("/api/sessions/{session_id}/search", get(routes::search::search::<C>))
        .route("/api/sessions/{session_id}/search/{direction}", post(routes::search::navigate::<C>))
        .route("/api/sessions/{session_id}/page-size", put(routes::search::set_page_size::<C>))
        .route("/api/sessions/{session_id}/objects/{object_id}", get(routes::objects::object_details::<C>))
        .route("/api/objects/{object_id}/image", get(download_image_handler::<C>))
        .route(
            "/api/sessions/{session_id}/favorites",
            get(routes::favorites::list::<C>).delete(routes::favorites::clear::<C>),
        )
        .route("/api/sessions/{session_id}/favorites/export", get(export_favorites_handler::<C>))
        .route("/api/sessions/{session_id}/favorites/{object_id}", post(routes::favorites::toggle::<C>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config.backend)?;
    info!(
        "Collection API: {} (timeout {:?}, cache validity {:?})",
        config.backend.met_api_url, config.backend.request_timeout, config.backend.cache_ttl
    );
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    info!("Listening on http://{}", config.listen_addr);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
