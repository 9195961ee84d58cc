//! OAuth authorization-code login and session resolution.

use crate::auth::{
    domain::{AuthDomainError, OAuthState, Session, SessionId},
    ports::{
        IdentityProvider, IdentityProviderError, PendingStateStore, SessionStore,
        SessionStoreError,
    },
};
use chrono::TimeDelta;
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

/// Minutes an issued state value stays redeemable.
const STATE_LIFETIME_MINUTES: i64 = 10;

/// Query parameters delivered to the OAuth callback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CallbackParams {
    /// Authorization code.
    pub code: Option<String>,
    /// State value echoed by the provider.
    pub state: Option<String>,
    /// OAuth error code when the user or provider aborted the flow.
    pub error: Option<String>,
    /// Provider description of `error`.
    pub error_description: Option<String>,
}

/// Errors raised by the login service.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// No valid session accompanies the request.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The provider redirected back with an error.
    #[error("Authentication error: {0}")]
    ProviderDenied(String),

    /// The callback carried no authorization code.
    #[error("No authorization code received")]
    MissingCode,

    /// The callback state is missing, unknown, expired, or already used.
    #[error("Invalid or expired state parameter")]
    InvalidState,

    /// The code exchange failed.
    #[error("Authentication failed: {0}")]
    Exchange(#[from] IdentityProviderError),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AuthDomainError),

    /// A store failed.
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

/// Result type for login service operations.
pub type AuthServiceResult<T> = Result<T, AuthServiceError>;

/// Service driving the login flow and owning session lifetime.
pub struct AuthService<S, P, I, C>
where
    S: SessionStore,
    P: PendingStateStore,
    I: IdentityProvider,
    C: Clock + Send + Sync,
{
    sessions: Arc<S>,
    states: Arc<P>,
    identity: Arc<I>,
    clock: Arc<C>,
    session_lifetime: Duration,
}

impl<S, P, I, C> AuthService<S, P, I, C>
where
    S: SessionStore,
    P: PendingStateStore,
    I: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Creates the service.
    #[must_use]
    pub const fn new(
        sessions: Arc<S>,
        states: Arc<P>,
        identity: Arc<I>,
        clock: Arc<C>,
        session_lifetime: Duration,
    ) -> Self {
        Self {
            sessions,
            states,
            identity,
            clock,
            session_lifetime,
        }
    }

    /// Returns the lifetime given to new sessions.
    #[must_use]
    pub const fn session_lifetime(&self) -> Duration {
        self.session_lifetime
    }

    /// Issues a state value and returns the authorization URL to redirect to.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Store`] when the state cannot be recorded.
    pub async fn begin_login(&self) -> AuthServiceResult<Url> {
        let now = self.clock.utc();
        self.states.purge_expired(now).await?;

        let state = OAuthState::generate();
        let url = self.identity.authorization_url(&state);
        self.states
            .insert(state, now + TimeDelta::minutes(STATE_LIFETIME_MINUTES))
            .await?;
        Ok(url)
    }

    /// Completes the login from the callback parameters and opens a session.
    ///
    /// The state value is consumed even when the exchange fails. Sessions that
    /// have already expired are purged before the new one is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::ProviderDenied`],
    /// [`AuthServiceError::MissingCode`], [`AuthServiceError::InvalidState`],
    /// or [`AuthServiceError::Exchange`] depending on which step failed.
    pub async fn complete_login(&self, params: CallbackParams) -> AuthServiceResult<Session> {
        if let Some(error) = params.error {
            warn!(error = %error, "identity provider returned an error");
            return Err(AuthServiceError::ProviderDenied(
                params.error_description.unwrap_or(error),
            ));
        }
        let code = params
            .code
            .filter(|code| !code.is_empty())
            .ok_or(AuthServiceError::MissingCode)?;
        self.redeem_state(params.state.as_deref()).await?;

        let grant = self.identity.exchange_code(&code).await?;
        let session = Session::open(grant, self.session_lifetime, &*self.clock)?;
        let purged = self.sessions.purge_expired(self.clock.utc()).await?;
        if purged > 0 {
            debug!(purged, "expired sessions purged");
        }
        self.sessions.insert(session.clone()).await?;
        info!(expires_at = %session.expires_at(), "session opened");
        Ok(session)
    }

    async fn redeem_state(&self, raw: Option<&str>) -> AuthServiceResult<()> {
        let state = OAuthState::parse(raw.unwrap_or_default())
            .map_err(|_| AuthServiceError::InvalidState)?;
        match self.states.take(&state).await? {
            Some(expires_at) if expires_at > self.clock.utc() => Ok(()),
            _ => {
                warn!("rejected callback with unknown or expired state");
                Err(AuthServiceError::InvalidState)
            }
        }
    }

    /// Returns the live session for a cookie value.
    ///
    /// Expired sessions are evicted.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::NotAuthenticated`] when the cookie is
    /// absent, unknown, or expired.
    pub async fn resolve(&self, cookie: Option<&str>) -> AuthServiceResult<Session> {
        let id = cookie
            .and_then(|value| SessionId::parse(value).ok())
            .ok_or(AuthServiceError::NotAuthenticated)?;
        let session = self
            .sessions
            .get(&id)
            .await?
            .ok_or(AuthServiceError::NotAuthenticated)?;

        if session.is_expired_at(self.clock.utc()) {
            self.sessions.remove(&id).await?;
            info!("expired session evicted");
            return Err(AuthServiceError::NotAuthenticated);
        }
        Ok(session)
    }

    /// Ends the session named by the cookie, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Store`] when the session store fails.
    pub async fn logout(&self, cookie: Option<&str>) -> AuthServiceResult<bool> {
        let Some(id) = cookie.and_then(|value| SessionId::parse(value).ok()) else {
            return Ok(false);
        };
        let removed = self.sessions.remove(&id).await?;
        if removed {
            info!("session closed");
        }
        Ok(removed)
    }
}
