//! Calendar endpoints.

use super::mail::ListQuery;
use crate::graph::{
    domain::{CreateEventRequest, Event, PageSize},
    services::CalendarService,
};
use crate::http::{error::ApiError, session::CurrentSession, state::AppState};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};

/// `GET /api/v1/calendar`: events ordered by start.
///
/// # Errors
///
/// Returns 401 without a session, 400 for a malformed query, or the Graph
/// error.
pub async fn list(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let Query(query) = query?;
    let events = CalendarService::new(state.graph_for(&session))
        .list_events(PageSize::from(query.top))
        .await?;
    Ok(Json(events))
}

/// `POST /api/v1/calendar`.
///
/// # Errors
///
/// Returns 401 without a session, 400 for an invalid payload, or the Graph
/// error.
pub async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Json<Event>, ApiError> {
    let Json(request) = payload?;
    let event = CalendarService::new(state.graph_for(&session))
        .create_event(&request)
        .await?;
    Ok(Json(event))
}
