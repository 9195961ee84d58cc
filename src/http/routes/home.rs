//! Landing page.

use crate::http::session::session_cookie;
use crate::http::state::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;

const SIGNED_IN: &str = r#"<p><strong>Signed in</strong> &middot; <a href="/logout">Sign out</a></p>
<h2>Endpoints</h2>
<ul>
<li><a href="/api/v1/users/me">GET /api/v1/users/me</a></li>
<li><a href="/api/v1/mail">GET /api/v1/mail</a></li>
<li><a href="/api/v1/calendar">GET /api/v1/calendar</a></li>
<li><a href="/api/v1/drive/files">GET /api/v1/drive/files</a></li>
</ul>"#;

const SIGNED_OUT: &str = r#"<p>Not signed in.</p>
<p><a href="/login">Sign in with Microsoft</a></p>"#;

/// `GET /`: small status page showing whether the caller has a session.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let signed_in = state.auth().resolve(session_cookie(&headers)).await.is_ok();
    let status = if signed_in { SIGNED_IN } else { SIGNED_OUT };
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Graphdesk</title></head>\n<body>\n<h1>Graphdesk</h1>\n{status}\n</body>\n</html>\n"
    ))
}
