//! Server-side session record.

use super::{AccessToken, AuthDomainError, SessionId, TokenGrant};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde_json::Value;
use std::time::Duration;

/// Session binding an opaque identifier to a bearer token and account
/// claims until a fixed expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: SessionId,
    access_token: AccessToken,
    account: Value,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Opens a session for `grant` under a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::LifetimeOutOfRange`] when `lifetime` cannot
    /// be added to the current time.
    pub fn open(
        grant: TokenGrant,
        lifetime: Duration,
        clock: &impl Clock,
    ) -> Result<Self, AuthDomainError> {
        let out_of_range = || AuthDomainError::LifetimeOutOfRange(lifetime.as_secs());
        let created_at = clock.utc();
        let expires_at = TimeDelta::from_std(lifetime)
            .ok()
            .and_then(|delta| created_at.checked_add_signed(delta))
            .ok_or_else(out_of_range)?;
        let (access_token, account) = grant.into_parts();

        Ok(Self {
            id: SessionId::generate(),
            access_token,
            account,
            created_at,
            expires_at,
        })
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the bearer token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the account claims.
    #[must_use]
    pub const fn account(&self) -> &Value {
        &self.account
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the expiry timestamp.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns whether the session has expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
