//! Search, navigation and page size routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use backend::{
    api::search::{PageDirection, change_page, change_page_size, search_for_results},
    remote_utils::CollectionApi,
    session::SessionId,
    state::AppState,
};
use common::{
    pagination::PageSize,
    search_query::{ImageFilter, SearchQuery},
    search_result::SearchOutcome,
};
use serde::{Deserialize, Serialize};

use crate::routes::json_or_error;

/// `?q=..&images=require_images|exclude_images|no_filter`; a missing
/// `images` falls back to the configured default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub images: Option<ImageFilter>,
}

impl SearchParams {
    fn to_query(&self, default_filter: ImageFilter) -> SearchQuery {
        SearchQuery::new(self.q.clone(), self.images.unwrap_or(default_filter))
    }
}

async fn _search<C: CollectionApi>(state: AppState<C>, session_id: SessionId, params: SearchParams) -> anyhow::Result<SearchOutcome> {
    let session = state.session(session_id)?;
    let mut session = session.lock().await;
    let query = params.to_query(state.default_image_filter);
    Ok(search_for_results(&state.cache, &mut session, query).await?)
}

pub async fn search<C: CollectionApi + 'static>(
    State(state): State<AppState<C>>,
    Path(session_id): Path<SessionId>,
    Query(params): Query<SearchParams>,
) -> Response {
    json_or_error("search", _search(state, session_id, params).await)
}

async fn _navigate<C: CollectionApi>(
    state: AppState<C>,
    session_id: SessionId,
    direction: PageDirection,
    params: SearchParams,
) -> anyhow::Result<SearchOutcome> {
    let session = state.session(session_id)?;
    let mut session = session.lock().await;
    let query = params.to_query(state.default_image_filter);
    Ok(change_page(&state.cache, &mut session, query, direction).await?)
}

pub async fn navigate<C: CollectionApi + 'static>(
    State(state): State<AppState<C>>,
    Path((session_id, direction)): Path<(SessionId, PageDirection)>,
    Query(params): Query<SearchParams>,
) -> Response {
    json_or_error("navigate", _navigate(state, session_id, direction, params).await)
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageSizeRequest {
    pub page_size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSizeChanged {
    pub page_size: u64,
    pub current_page: u64,
}

async fn _set_page_size<C: CollectionApi>(state: AppState<C>, session_id: SessionId, request: PageSizeRequest) -> anyhow::Result<PageSizeChanged> {
    let page_size = PageSize::new(request.page_size)?;
    let session = state.session(session_id)?;
    let mut session = session.lock().await;
    change_page_size(&mut session, page_size);
    Ok(PageSizeChanged { page_size: page_size.get(), current_page: session.pagination.current_page })
}

pub async fn set_page_size<C: CollectionApi + 'static>(
    State(state): State<AppState<C>>,
    Path(session_id): Path<SessionId>,
    Json(request): Json<PageSizeRequest>,
) -> Response {
    json_or_error("set_page_size", _set_page_size(state, session_id, request).await)
}
