//! Storage port for server-side sessions.

use crate::auth::domain::{Session, SessionId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for session and state store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Store of active sessions keyed by identifier.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores `session`, replacing any session with the same identifier.
    async fn insert(&self, session: Session) -> SessionStoreResult<()>;

    /// Returns the session stored under `id`.
    async fn get(&self, id: &SessionId) -> SessionStoreResult<Option<Session>>;

    /// Removes the session stored under `id`, returning whether one existed.
    async fn remove(&self, id: &SessionId) -> SessionStoreResult<bool>;

    /// Drops every session expired at `now`, returning how many were removed.
    async fn purge_expired(&self, now: DateTime<Utc>) -> SessionStoreResult<usize>;
}

/// Errors returned by session and state store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// Persistence-layer failure.
    #[error("session store error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a persistence-layer failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
