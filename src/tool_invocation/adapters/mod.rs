//! Adapter implementations for tool invocation ports.

pub mod http;
pub mod memory;
pub mod mock;

mod sleeper;

pub use sleeper::{RecordingSleeper, TokioSleeper};

use crate::tool_invocation::{domain::TargetName, ports::ToolBackend};
use std::sync::Arc;
use tracing::info;
use url::Url;

/// Picks the backend for `target`: HTTP when an endpoint is configured,
/// otherwise the canned mock.
///
/// Targets without a canned catalog get an empty mock, so every call
/// against them answers with the generic mock payload.
pub fn select_backend(
    target: TargetName,
    endpoint: Option<Url>,
    http: &reqwest::Client,
) -> Arc<dyn ToolBackend> {
    match endpoint {
        Some(url) => {
            info!(server = %target, endpoint = %url, "using HTTP tool backend");
            Arc::new(http::HttpToolBackend::new(target, url, http.clone()))
        }
        None => {
            info!(server = %target, "using mock tool backend");
            let mock = if target == TargetName::github() {
                mock::MockToolBackend::github()
            } else if target == TargetName::testsprite() {
                mock::MockToolBackend::testsprite()
            } else {
                mock::MockToolBackend::new(target)
            };
            Arc::new(mock)
        }
    }
}
