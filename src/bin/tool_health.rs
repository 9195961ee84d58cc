//! Probes every tool target once and exits non-zero when any is down.
//!
//! Usage:
//!
//! ```text
//! tool_health [--github-endpoint <url>] [--testsprite-endpoint <url>]
//! ```
//!
//! Targets without an endpoint are served by the built-in mock backends.
//! Exits with `0` when every target answered and `1` otherwise, including
//! connection and start-up failures.

use clap::Parser;
use graphdesk::config::HealthCheckArgs;
use graphdesk::telemetry::init_tracing;
use graphdesk::tool_invocation::{
    adapters::{TokioSleeper, memory::InMemoryConnectionRegistry, select_backend},
    domain::{RetryPolicy, TargetName},
    services::{HealthMonitor, HealthProbe, ToolInvocationClient},
};
use mockable::DefaultClock;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let args = HealthCheckArgs::parse();
    if init_tracing(args.log_json).is_err() {
        return ExitCode::FAILURE;
    }
    let http = match reqwest::Client::builder().build() {
        Ok(http) => http,
        Err(err) => {
            error!(error = %err, "failed to build HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let client = ToolInvocationClient::new(
        Arc::new(InMemoryConnectionRegistry::new()),
        Arc::new(TokioSleeper),
        RetryPolicy::new(args.backoff_unit()),
    )
    .with_backend(select_backend(
        TargetName::github(),
        args.github_endpoint.clone(),
        &http,
    ))
    .with_backend(select_backend(
        TargetName::testsprite(),
        args.testsprite_endpoint.clone(),
        &http,
    ));

    let monitor = HealthMonitor::new(
        Arc::new(client),
        Arc::new(DefaultClock),
        vec![HealthProbe::github(), HealthProbe::testsprite()],
    )
    .with_high_latency(args.high_latency());

    if let Err(err) = monitor.connect_all().await {
        error!(error = %err, "health check aborted");
        return ExitCode::FAILURE;
    }
    let report = monitor.run().await;
    ExitCode::from(report.exit_code())
}
