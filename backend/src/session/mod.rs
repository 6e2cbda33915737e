//! Per-session state and the registry that owns it.
//!
//! Pagination and favorites belong to exactly one session. Each session sits
//! behind its own mutex so one interaction mutates it as a single step.
//! A session ends when it is removed or has been idle for too long.

pub mod favorites;

use std::{
    collections::HashMap,
    fmt::Display,
    str::FromStr,
    sync::{Arc, PoisonError, RwLock},
    time::{Duration, Instant},
};

use common::pagination::{PageSize, PaginationState};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use favorites::FavoritesStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new_random() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(SessionId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown session {0}")]
    NotFound(SessionId),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub pagination: PaginationState,
    pub favorites: FavoritesStore,
}

impl Session {
    pub fn new(page_size: PageSize) -> Self {
        Self { pagination: PaginationState::new(page_size), favorites: FavoritesStore::new() }
    }
}

pub type SharedSession = Arc<tokio::sync::Mutex<Session>>;

struct SessionEntry {
    session: SharedSession,
    last_seen: Instant,
}

/// Sessions untouched for longer than `idle_timeout` are dropped on the next
/// `create` or `get`, together with their favorites.
pub struct SessionRegistry {
    default_page_size: PageSize,
    idle_timeout: Duration,
    sessions: RwLock<HashMap<SessionId, SessionEntry>>,
}

impl SessionRegistry {
    pub fn new(default_page_size: PageSize, idle_timeout: Duration) -> Self {
        Self { default_page_size, idle_timeout, sessions: RwLock::new(HashMap::new()) }
    }

    /// Starts an empty session: page 1, default page size, no favorites.
    pub fn create(&self) -> SessionId {
        let session_id = SessionId::new_random();
        let session = Arc::new(tokio::sync::Mutex::new(Session::new(self.default_page_size)));
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        self.reclaim_idle(&mut sessions);
        sessions.insert(session_id, SessionEntry { session, last_seen: Instant::now() });
        tracing::info!("Session started: {}", session_id);
        session_id
    }

    /// Looks a session up and marks it as seen.
    pub fn get(&self, session_id: SessionId) -> Result<SharedSession, SessionError> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        self.reclaim_idle(&mut sessions);
        let entry = sessions.get_mut(&session_id).ok_or(SessionError::NotFound(session_id))?;
        entry.last_seen = Instant::now();
        Ok(entry.session.clone())
    }

    /// Ends a session; its favorites are gone unless they were exported.
    pub fn remove(&self, session_id: SessionId) -> Result<(), SessionError> {
        let removed = self.sessions.write().unwrap_or_else(PoisonError::into_inner).remove(&session_id);
        match removed {
            Some(_) => {
                tracing::info!("Session ended: {}", session_id);
                Ok(())
            }
            None => Err(SessionError::NotFound(session_id)),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn reclaim_idle(&self, sessions: &mut HashMap<SessionId, SessionEntry>) {
        sessions.retain(|session_id, entry| {
            let alive = entry.last_seen.elapsed() < self.idle_timeout;
            if !alive {
                tracing::info!("Session expired after {:?} idle: {}", self.idle_timeout, session_id);
            }
            alive
        });
    }
}
