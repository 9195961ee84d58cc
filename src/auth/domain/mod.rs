//! Domain model for the OAuth login flow and server-side sessions.

mod error;
mod grant;
mod session;
mod token;

pub use error::AuthDomainError;
pub use grant::{AccessToken, TokenGrant};
pub use session::Session;
pub use token::{OAuthState, SessionId};
