//! Tokens returned by the identity provider.

use super::AuthDomainError;
use serde_json::{Map, Value};
use std::fmt;

/// Bearer token used to call the Graph API on behalf of a user.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a non-empty access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyAccessToken`] for an empty value.
    pub fn new(value: impl Into<String>) -> Result<Self, AuthDomainError> {
        let token = value.into();
        if token.is_empty() {
            return Err(AuthDomainError::EmptyAccessToken);
        }
        Ok(Self(token))
    }

    /// Returns the raw bearer value.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("AccessToken(<redacted>)")
    }
}

/// Result of a successful authorization-code exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenGrant {
    access_token: AccessToken,
    account: Value,
}

impl TokenGrant {
    /// Creates a grant; `account` defaults to an empty object when absent.
    #[must_use]
    pub fn new(access_token: AccessToken, account: Option<Value>) -> Self {
        Self {
            access_token,
            account: account.unwrap_or_else(|| Value::Object(Map::new())),
        }
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the account claims.
    #[must_use]
    pub const fn account(&self) -> &Value {
        &self.account
    }

    /// Splits the grant into its token and claims.
    #[must_use]
    pub fn into_parts(self) -> (AccessToken, Value) {
        (self.access_token, self.account)
    }
}
