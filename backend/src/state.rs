//! State shared by every request handler.

use std::sync::Arc;

use common::search_query::ImageFilter;

use crate::{
    config::BackendConfig,
    remote_utils::{CollectionApi, MetClient, ResultCache},
    session::{SessionId, SessionRegistry, SharedSession, SessionError},
};

/// The result cache is shared by all sessions; sessions themselves live in
/// the registry and never leak into each other.
pub struct AppState<C = MetClient> {
    pub cache: Arc<ResultCache<C>>,
    pub sessions: Arc<SessionRegistry>,
    pub default_image_filter: ImageFilter,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            sessions: self.sessions.clone(),
            default_image_filter: self.default_image_filter,
        }
    }
}

impl AppState<MetClient> {
    pub fn from_config(config: &BackendConfig) -> anyhow::Result<Self> {
        let client = MetClient::new(config.met_api_url.clone(), config.request_timeout)?;
        Ok(Self::new(client, config))
    }
}

impl<C: CollectionApi> AppState<C> {
    pub fn new(client: C, config: &BackendConfig) -> Self {
        Self {
            cache: Arc::new(ResultCache::new(client, config.cache_ttl)),
            sessions: Arc::new(SessionRegistry::new(config.default_page_size, config.session_idle_timeout)),
            default_image_filter: config.default_image_filter(),
        }
    }

    pub fn session(&self, session_id: SessionId) -> Result<SharedSession, SessionError> {
        self.sessions.get(session_id)
    }
}
