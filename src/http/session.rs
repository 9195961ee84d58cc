//! Session cookie handling and the authenticated-session extractor.

use super::{error::ApiError, state::AppState};
use crate::auth::domain::Session;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header::COOKIE, request::Parts};
use std::time::Duration;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session_id";

/// Returns the session cookie value from the request headers.
#[must_use]
pub fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value establishing a session.
#[must_use]
pub fn set_session_cookie(session: &Session, max_age: Duration) -> String {
    format!(
        "{SESSION_COOKIE}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        session.id(),
        max_age.as_secs()
    )
}

/// `Set-Cookie` value removing the session cookie.
#[must_use]
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// Extractor yielding the caller's live session, or 401.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state.auth().resolve(session_cookie(&parts.headers)).await?;
        Ok(Self(session))
    }
}
