//! Opaque random tokens: session identifiers and OAuth state values.

use super::AuthDomainError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use std::fmt;

/// Number of random bytes behind every generated token.
const TOKEN_BYTES: usize = 32;

fn random_token() -> String {
    let mut bytes = [0_u8; TOKEN_BYTES];
    rand::rng().fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

macro_rules! opaque_token {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh token from 32 random bytes, encoded as
            /// URL-safe base64 without padding.
            #[must_use]
            pub fn generate() -> Self {
                Self(random_token())
            }

            /// Wraps a token received from a client.
            ///
            /// # Errors
            ///
            /// Returns [`AuthDomainError::EmptyToken`] when the value is
            /// empty after trimming.
            pub fn parse(value: &str) -> Result<Self, AuthDomainError> {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(AuthDomainError::EmptyToken($label));
                }
                Ok(Self(trimmed.to_owned()))
            }

            /// Returns the token as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(&self.0)
            }
        }
    };
}

opaque_token!(
    /// Opaque identifier of a server-side session, carried in the
    /// `session_id` cookie.
    SessionId,
    "session id"
);

opaque_token!(
    /// Anti-forgery value sent with the authorization request and echoed on
    /// the callback.
    OAuthState,
    "state"
);

impl fmt::Debug for SessionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SessionId(<redacted>)")
    }
}

impl fmt::Debug for OAuthState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("OAuthState").field(&self.0).finish()
    }
}
