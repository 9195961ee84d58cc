//! Mail endpoints.

use crate::graph::{
    domain::{Message, PageSize, SendMessageRequest},
    services::MailService,
};
use crate::http::{error::ApiError, session::CurrentSession, state::AppState};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

/// Query of the list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Requested page size.
    pub top: Option<u32>,
}

/// `GET /api/v1/mail`: newest messages first.
///
/// # Errors
///
/// Returns 401 without a session, 400 for a malformed query, or the Graph
/// error.
pub async fn list(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let Query(query) = query?;
    let messages = MailService::new(state.graph_for(&session))
        .list_messages(PageSize::from(query.top))
        .await?;
    Ok(Json(messages))
}

/// `GET /api/v1/mail/{message_id}`.
///
/// # Errors
///
/// Returns 401 without a session, or the Graph error.
pub async fn get_one(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(message_id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let message = MailService::new(state.graph_for(&session))
        .get_message(&message_id)
        .await?;
    Ok(Json(message))
}

/// `POST /api/v1/mail/send` (also `POST /api/v1/mail`).
///
/// # Errors
///
/// Returns 401 without a session, 400 for an invalid payload, or the Graph
/// error.
pub async fn send(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload?;
    MailService::new(state.graph_for(&session))
        .send_message(&request)
        .await?;
    Ok(Json(json!({"message": "Email sent successfully"})))
}
