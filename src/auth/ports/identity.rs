//! Identity provider port for the authorization-code flow.

use crate::auth::domain::{OAuthState, TokenGrant};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use url::Url;

/// Result type for identity provider operations.
pub type IdentityProviderResult<T> = Result<T, IdentityProviderError>;

/// OAuth 2.0 identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Builds the authorization URL the user agent is redirected to.
    fn authorization_url(&self, state: &OAuthState) -> Url;

    /// Exchanges an authorization code for tokens.
    async fn exchange_code(&self, code: &str) -> IdentityProviderResult<TokenGrant>;
}

/// Errors returned by identity provider adapters.
#[derive(Debug, Clone, Error)]
pub enum IdentityProviderError {
    /// The provider answered with an OAuth error.
    #[error("{description}")]
    Rejected {
        /// OAuth error code.
        error: String,
        /// Human-readable description from the provider.
        description: String,
    },

    /// The provider response could not be interpreted.
    #[error("invalid token response: {0}")]
    InvalidResponse(String),

    /// The request did not complete.
    #[error("identity provider unreachable: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityProviderError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
