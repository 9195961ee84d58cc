//! In-memory session and state stores.

use crate::auth::{
    domain::{OAuthState, Session, SessionId},
    ports::{PendingStateStore, SessionStore, SessionStoreError, SessionStoreResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

fn poisoned(err: impl std::fmt::Display) -> SessionStoreError {
    SessionStoreError::persistence(std::io::Error::other(err.to_string()))
}

/// Thread-safe in-memory session store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) -> SessionStoreResult<()> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        sessions.insert(session.id().as_str().to_owned(), session);
        Ok(())
    }

    async fn get(&self, id: &SessionId) -> SessionStoreResult<Option<Session>> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.get(id.as_str()).cloned())
    }

    async fn remove(&self, id: &SessionId) -> SessionStoreResult<bool> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        Ok(sessions.remove(id.as_str()).is_some())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> SessionStoreResult<usize> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));
        Ok(before.saturating_sub(sessions.len()))
    }
}

/// Thread-safe in-memory store of pending OAuth states.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPendingStateStore {
    states: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
}

impl InMemoryPendingStateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PendingStateStore for InMemoryPendingStateStore {
    async fn insert(
        &self,
        state: OAuthState,
        expires_at: DateTime<Utc>,
    ) -> SessionStoreResult<()> {
        let mut states = self.states.write().map_err(poisoned)?;
        states.insert(state.as_str().to_owned(), expires_at);
        Ok(())
    }

    async fn take(&self, state: &OAuthState) -> SessionStoreResult<Option<DateTime<Utc>>> {
        let mut states = self.states.write().map_err(poisoned)?;
        Ok(states.remove(state.as_str()))
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> SessionStoreResult<usize> {
        let mut states = self.states.write().map_err(poisoned)?;
        let before = states.len();
        states.retain(|_, expires_at| *expires_at > now);
        Ok(before.saturating_sub(states.len()))
    }
}
