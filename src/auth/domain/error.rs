//! Error types for auth domain validation.

use thiserror::Error;

/// Errors returned while constructing auth domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthDomainError {
    /// An opaque token (session id or state) was empty.
    #[error("{0} must not be empty")]
    EmptyToken(&'static str),

    /// The identity provider returned an empty access token.
    #[error("access token must not be empty")]
    EmptyAccessToken,

    /// The session lifetime cannot be represented as a timestamp offset.
    #[error("session lifetime of {0} seconds is out of range")]
    LifetimeOutOfRange(u64),
}
