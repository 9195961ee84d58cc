//! Unit tests for the HTTP layer.

mod router_tests;
mod session_tests;

use crate::config::Settings;
use crate::http::state::AppState;
use clap::Parser;

/// Settings pointing at unroutable upstreams; router tests never reach them.
pub(super) fn offline_settings() -> Settings {
    Settings::try_parse_from([
        "graphdesk",
        "--client-id",
        "client-123",
        "--client-secret",
        "s3cret",
        "--tenant-id",
        "contoso",
        "--authority-host",
        "http://127.0.0.1:9",
        "--graph-api-endpoint",
        "http://127.0.0.1:9/v1.0",
    ])
    .expect("settings should parse")
}

pub(super) fn offline_state() -> AppState {
    AppState::from_settings(&offline_settings(), reqwest::Client::new())
}
