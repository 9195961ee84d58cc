//! Cookie parsing and formatting.

use crate::auth::domain::{AccessToken, Session, TokenGrant};
use crate::http::session::{clear_session_cookie, session_cookie, set_session_cookie};
use axum::http::{HeaderMap, HeaderValue, header::COOKIE};
use mockable::DefaultClock;
use rstest::rstest;
use std::time::Duration;

fn headers(values: &[&str]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for value in values {
        headers.append(COOKIE, HeaderValue::from_str(value).expect("header value"));
    }
    headers
}

#[rstest]
#[case(&["session_id=abc"], Some("abc"))]
#[case(&["theme=dark; session_id=abc; lang=en"], Some("abc"))]
#[case(&["theme=dark", "session_id=xyz"], Some("xyz"))]
#[case(&["session_id="], None)]
#[case(&["other_session_id=abc"], None)]
#[case(&[], None)]
fn finds_session_cookie(#[case] values: &[&str], #[case] expected: Option<&str>) {
    let headers = headers(values);
    assert_eq!(session_cookie(&headers), expected);
}

#[rstest]
fn set_cookie_carries_id_and_max_age() {
    let grant = TokenGrant::new(AccessToken::new("token").expect("token"), None);
    let session =
        Session::open(grant, Duration::from_secs(60), &DefaultClock).expect("session opens");

    let cookie = set_session_cookie(&session, Duration::from_secs(3600));

    assert!(cookie.starts_with(&format!("session_id={};", session.id())));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.ends_with("Max-Age=3600"));
}

#[rstest]
fn clear_cookie_expires_immediately() {
    let cookie = clear_session_cookie();
    assert!(cookie.starts_with("session_id=;"));
    assert!(cookie.ends_with("Max-Age=0"));
}
