//! HTTP surface of the Graph proxy.
//!
//! [`build_router`] assembles the public pages (`/`, `/login`, `/callback`,
//! `/logout`, `/health`) and the session-guarded `/api/v1` resources.

pub mod error;
pub mod routes;
pub mod session;
pub mod state;

#[cfg(test)]
mod tests;

use crate::config::ConfigError;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use routes::{auth, calendar, drive, health, home, mail, users};
use state::AppState;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Largest accepted upload body; Graph's simple upload caps files at 4 MiB.
pub const MAX_UPLOAD_BYTES: usize = 4 * 1024 * 1024;

/// Builds the application router.
#[must_use]
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/users/me", get(users::me))
        .route("/mail", get(mail::list).post(mail::send))
        .route("/mail/send", post(mail::send))
        .route("/mail/{message_id}", get(mail::get_one))
        .route("/calendar", get(calendar::list).post(calendar::create))
        .route("/drive/files", get(drive::list))
        .route("/drive/files/{item_id}/download", get(drive::download))
        .route(
            "/drive/files/upload",
            post(drive::upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        );

    Router::new()
        .route("/", get(home::index))
        .route("/login", get(auth::login))
        .route("/callback", get(auth::callback))
        .route("/logout", get(auth::logout))
        .route("/health", get(health::check))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Builds a credentialed CORS layer for the given origins.
///
/// An empty list yields a layer that adds no CORS headers.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidCorsOrigin`] when an origin is not a valid
/// header value.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    if origins.is_empty() {
        return Ok(CorsLayer::new());
    }
    let allowed = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| ConfigError::InvalidCorsOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]))
}
