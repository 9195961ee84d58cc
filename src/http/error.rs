//! JSON error responses.
//!
//! Every failure is rendered as
//! `{"error": {"message", "type", "code"[, "details"]}}`.

use crate::auth::services::AuthServiceError;
use crate::graph::{ports::GraphApiError, services::GraphServiceError};
use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{error, warn};

/// Error returned by handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No valid session.
    #[error("Not authenticated")]
    Unauthenticated,

    /// The request is malformed or the login callback failed.
    #[error("{0}")]
    BadRequest(String),

    /// Graph answered with an error or was unreachable.
    #[error(transparent)]
    Graph(#[from] GraphApiError),

    /// Unexpected server-side failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the response status.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Graph(err) => StatusCode::from_u16(err.status)
                .ok()
                .filter(|status| status.is_client_error() || status.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "not_authenticated",
            Self::BadRequest(_) => "invalid_request",
            Self::Graph(_) => "graph_error",
            Self::Internal(_) => "internal_error",
        }
    }

    fn details(&self) -> Option<&Value> {
        match self {
            Self::Graph(err) => err.details.as_ref(),
            _ => None,
        }
    }
}

/// Snake-case name of a status, e.g. `not_found`.
fn status_type(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown")
        .to_ascii_lowercase()
        .replace([' ', '-'], "_")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        let mut body = json!({
            "message": self.to_string(),
            "type": status_type(status),
            "code": self.code(),
        });
        if let (Some(details), Some(fields)) = (self.details(), body.as_object_mut()) {
            fields.insert("details".to_owned(), details.clone());
        }
        (status, Json(json!({"error": body}))).into_response()
    }
}

impl From<AuthServiceError> for ApiError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::NotAuthenticated => Self::Unauthenticated,
            AuthServiceError::ProviderDenied(_)
            | AuthServiceError::MissingCode
            | AuthServiceError::InvalidState
            | AuthServiceError::Exchange(_) => Self::BadRequest(err.to_string()),
            AuthServiceError::Domain(_) | AuthServiceError::Store(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<GraphServiceError> for ApiError {
    fn from(err: GraphServiceError) -> Self {
        match err {
            GraphServiceError::Validation(invalid) => Self::BadRequest(invalid.to_string()),
            GraphServiceError::Api(api) => Self::Graph(api),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::BadRequest(err.body_text())
    }
}
