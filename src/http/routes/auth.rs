//! Login, callback, and logout.

use crate::auth::services::CallbackParams;
use crate::http::error::ApiError;
use crate::http::session::{clear_session_cookie, session_cookie, set_session_cookie};
use crate::http::state::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, header::SET_COOKIE};
use axum::response::{IntoResponse, Redirect, Response};

/// `GET /login`: redirects to the identity provider.
///
/// # Errors
///
/// Returns 500 when the state value cannot be recorded.
pub async fn login(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    let url = state.auth().begin_login().await?;
    Ok(Redirect::temporary(url.as_str()))
}

/// `GET /callback`: completes the login, sets the session cookie, and
/// redirects home.
///
/// # Errors
///
/// Returns 400 when the provider reported an error, the code or state is
/// missing or invalid, or the code exchange fails.
pub async fn callback(
    State(state): State<AppState>,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let session = state.auth().complete_login(params).await?;
    let cookie = set_session_cookie(&session, state.auth().session_lifetime());
    Ok(([(SET_COOKIE, cookie)], Redirect::temporary("/")).into_response())
}

/// `GET /logout`: drops the session, clears the cookie, and redirects home.
///
/// # Errors
///
/// Returns 500 when the session store fails.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    state.auth().logout(session_cookie(&headers)).await?;
    Ok((
        [(SET_COOKIE, clear_session_cookie())],
        Redirect::temporary("/"),
    )
        .into_response())
}
