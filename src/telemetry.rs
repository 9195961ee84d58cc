//! Tracing subscriber set-up shared by the binaries.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "graphdesk=info,tool_health=info,tower_http=info";

/// Error raised when a global subscriber is already installed.
#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct TelemetryError(String);

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides [`DEFAULT_FILTER`]. With `json` set, events are
/// written as JSON lines.
///
/// # Errors
///
/// Returns [`TelemetryError`] when a subscriber was already installed.
pub fn init_tracing(json: bool) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| TelemetryError(err.to_string()))
}
