//! Profile endpoint.

use crate::graph::{domain::UserProfile, services::UserService};
use crate::http::{error::ApiError, session::CurrentSession, state::AppState};
use axum::Json;
use axum::extract::State;

/// `GET /api/v1/users/me`.
///
/// # Errors
///
/// Returns 401 without a session, or the Graph error.
pub async fn me(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = UserService::new(state.graph_for(&session)).get_me().await?;
    Ok(Json(profile))
}
