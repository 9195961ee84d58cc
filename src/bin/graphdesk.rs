//! Runs the Microsoft Graph proxy server.
//!
//! Usage:
//!
//! ```text
//! graphdesk --client-id <id> --client-secret <secret> --tenant-id <tenant>
//! ```
//!
//! Every flag also reads from the environment (`CLIENT_ID`, `CLIENT_SECRET`,
//! `TENANT_ID`, `GRAPHDESK_HOST`, `GRAPHDESK_PORT`, ...). The server stops
//! gracefully on Ctrl-C.

use clap::Parser;
use graphdesk::config::Settings;
use graphdesk::http::{build_router, cors_layer, state::AppState};
use graphdesk::telemetry::init_tracing;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let settings = Settings::parse();
    init_tracing(settings.log_json)?;
    settings.validate()?;

    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let cors = cors_layer(&settings.cors_origins()?)?;
    let app = build_router(AppState::from_settings(&settings, http), cors);

    let address = settings.bind_address();
    let listener = TcpListener::bind(address).await?;
    info!(%address, graph = %settings.graph_api_endpoint, "graphdesk listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("graphdesk stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
