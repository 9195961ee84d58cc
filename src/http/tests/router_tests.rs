//! Router behaviour that never reaches an upstream.

use super::offline_state;
use crate::http::{build_router, cors_layer};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use rstest::{fixture, rstest};
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use url::Url;

#[fixture]
fn app() -> Router {
    build_router(offline_state(), CorsLayer::new())
}

async fn send(app: Router, request: Request<Body>) -> axum::response::Response {
    app.oneshot(request).await.expect("router is infallible")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn health_reports_service(app: Router) {
    let response = send(app, get("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "graphdesk");
}

#[rstest]
#[case("/api/v1/users/me")]
#[case("/api/v1/mail")]
#[case("/api/v1/mail/AAMk-1")]
#[case("/api/v1/calendar")]
#[case("/api/v1/drive/files")]
#[case("/api/v1/drive/files/item-1/download")]
#[tokio::test(flavor = "multi_thread")]
async fn api_requires_session(app: Router, #[case] uri: &str) {
    let response = send(app, get(uri)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "not_authenticated");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_session_cookie_is_rejected(app: Router) {
    let request = Request::get("/api/v1/users/me")
        .header(header::COOKIE, "session_id=forged")
        .body(Body::empty())
        .expect("request");

    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_redirects_to_authorize_endpoint(app: Router) {
    let response = send(app, get("/login")).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header");
    let url = Url::parse(location).expect("absolute URL");
    assert_eq!(url.path(), "/contoso/oauth2/v2.0/authorize");
    assert!(url.query_pairs().any(|(key, _)| key == "state"));
    assert!(
        url.query_pairs()
            .any(|(key, value)| key == "client_id" && value == "client-123")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn callback_with_unknown_state_is_rejected(app: Router) {
    let response = send(app, get("/callback?code=abc&state=never-issued")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn callback_without_code_is_rejected(app: Router) {
    let response = send(app, get("/callback?state=whatever")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn callback_surfaces_provider_error(app: Router) {
    let response = send(
        app,
        get("/callback?error=access_denied&error_description=User%20cancelled"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["message"], "Authentication error: User cancelled");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_clears_cookie_and_redirects(app: Router) {
    let request = Request::get("/logout")
        .header(header::COOKIE, "session_id=stale")
        .body(Body::empty())
        .expect("request");

    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("set-cookie header");
    assert!(cookie.contains("Max-Age=0"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn home_offers_login_without_session(app: Router) {
    let response = send(app, get("/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let html = String::from_utf8(bytes.to_vec()).expect("utf-8");
    assert!(html.contains("href=\"/login\""));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cors_allows_configured_origin_with_credentials() {
    let cors = cors_layer(&["http://localhost:3000".to_owned()]).expect("valid origin");
    let app = build_router(offline_state(), cors);
    let request = Request::get("/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .expect("request");

    let response = send(app, request).await;

    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|value| value.to_str().ok()),
        Some("true")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cors_ignores_other_origins() {
    let cors = cors_layer(&["http://localhost:3000".to_owned()]).expect("valid origin");
    let app = build_router(offline_state(), cors);
    let request = Request::get("/health")
        .header(header::ORIGIN, "https://evil.example")
        .body(Body::empty())
        .expect("request");

    let response = send(app, request).await;

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
