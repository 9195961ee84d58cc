//! Storage port for issued OAuth state values.

use super::SessionStoreResult;
use crate::auth::domain::OAuthState;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Store of state values issued with authorization requests and not yet
/// redeemed.
#[async_trait]
pub trait PendingStateStore: Send + Sync {
    /// Records `state` as issued, valid until `expires_at`.
    async fn insert(&self, state: OAuthState, expires_at: DateTime<Utc>)
    -> SessionStoreResult<()>;

    /// Removes `state` and returns its expiry if it was pending.
    ///
    /// A state value can be taken at most once.
    async fn take(&self, state: &OAuthState) -> SessionStoreResult<Option<DateTime<Utc>>>;

    /// Drops every state that expired before `now`.
    async fn purge_expired(&self, now: DateTime<Utc>) -> SessionStoreResult<usize>;
}
