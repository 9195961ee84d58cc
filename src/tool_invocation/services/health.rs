//! Availability and latency probes for tool targets.

use super::client::{ToolInvocationClient, ToolInvocationResult};
use crate::tool_invocation::{
    domain::{TargetName, ToolParams},
    ports::{ConnectionRegistry, Sleeper},
};
use mockable::Clock;
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Latency above which a responding target is reported as slow.
pub const DEFAULT_HIGH_LATENCY: Duration = Duration::from_millis(2000);

/// One ping-like tool call used to probe a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthProbe {
    target: TargetName,
    tool: String,
    params: ToolParams,
}

impl HealthProbe {
    /// Creates a probe calling `tool` on `target`.
    #[must_use]
    pub fn new(target: TargetName, tool: impl Into<String>, params: ToolParams) -> Self {
        Self {
            target,
            tool: tool.into(),
            params,
        }
    }

    /// Probe for the code-hosting target.
    #[must_use]
    pub fn github() -> Self {
        Self::new(
            TargetName::github(),
            "search_repositories",
            object(json!({"query": "health-check"})),
        )
    }

    /// Probe for the test-orchestration target.
    #[must_use]
    pub fn testsprite() -> Self {
        Self::new(
            TargetName::testsprite(),
            "testsprite_bootstrap",
            object(json!({"projectPath": ".", "localPort": 0, "type": "backend"})),
        )
    }

    /// Returns the probed target.
    #[must_use]
    pub const fn target(&self) -> &TargetName {
        &self.target
    }

    /// Returns the probe tool name.
    #[must_use]
    pub fn tool(&self) -> &str {
        &self.tool
    }
}

/// Status reported for a probed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    /// The probe call succeeded.
    Ok,
    /// The probe call failed or the target was unreachable.
    Down,
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Ok => "OK",
            Self::Down => "DOWN",
        })
    }
}

/// Outcome of one probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    /// Probed target.
    pub target: TargetName,
    /// Reported status.
    pub status: ProbeStatus,
    /// Wall-clock latency of the probe call in milliseconds.
    pub latency_ms: i64,
    /// Whether the latency exceeded the slow threshold.
    pub high_latency: bool,
    /// Failure description when the target is down.
    pub error: Option<String>,
}

/// Aggregated outcome of a health check run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HealthReport {
    /// Per-target outcomes in probe order.
    pub outcomes: Vec<ProbeOutcome>,
}

impl HealthReport {
    /// Returns whether every probed target responded.
    #[must_use]
    pub fn all_operational(&self) -> bool {
        self.outcomes
            .iter()
            .all(|outcome| outcome.status == ProbeStatus::Ok)
    }

    /// Returns the process exit code for this report.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.all_operational())
    }
}

/// Runs health probes against connected targets.
pub struct HealthMonitor<R, S, C>
where
    R: ConnectionRegistry,
    S: Sleeper,
    C: Clock + Send + Sync,
{
    client: Arc<ToolInvocationClient<R, S>>,
    clock: Arc<C>,
    probes: Vec<HealthProbe>,
    high_latency: Duration,
}

impl<R, S, C> HealthMonitor<R, S, C>
where
    R: ConnectionRegistry,
    S: Sleeper,
    C: Clock + Send + Sync,
{
    /// Creates a monitor running `probes` in order.
    #[must_use]
    pub const fn new(
        client: Arc<ToolInvocationClient<R, S>>,
        clock: Arc<C>,
        probes: Vec<HealthProbe>,
    ) -> Self {
        Self {
            client,
            clock,
            probes,
            high_latency: DEFAULT_HIGH_LATENCY,
        }
    }

    /// Overrides the slow-response threshold.
    #[must_use]
    pub const fn with_high_latency(mut self, threshold: Duration) -> Self {
        self.high_latency = threshold;
        self
    }

    /// Connects every probed target.
    ///
    /// # Errors
    ///
    /// Returns the first connection error; later targets are not attempted.
    pub async fn connect_all(&self) -> ToolInvocationResult<()> {
        for probe in &self.probes {
            self.client.connect(&probe.target).await?;
        }
        Ok(())
    }

    /// Probes every target once and returns the aggregated report.
    pub async fn run(&self) -> HealthReport {
        let mut outcomes = Vec::with_capacity(self.probes.len());
        for probe in &self.probes {
            outcomes.push(self.check(probe).await);
        }

        let report = HealthReport { outcomes };
        if report.all_operational() {
            info!("all systems operational");
        } else {
            error!("one or more systems are down");
        }
        report
    }

    /// Probes one target.
    pub async fn check(&self, probe: &HealthProbe) -> ProbeOutcome {
        let started_at = self.clock.utc();
        let call = self
            .client
            .call(&probe.target, &probe.tool, probe.params.clone())
            .await;
        let latency_ms = (self.clock.utc() - started_at).num_milliseconds();

        let failure = match call {
            Ok(result) if result.is_success() => None,
            Ok(result) => Some(result.error().unwrap_or("tool call failed").to_owned()),
            Err(err) => Some(err.to_string()),
        };
        let server = probe.target.as_str().to_ascii_uppercase();

        if let Some(message) = failure {
            error!(server, error = %message, "[{server}] Status: DOWN");
            return ProbeOutcome {
                target: probe.target.clone(),
                status: ProbeStatus::Down,
                latency_ms,
                high_latency: false,
                error: Some(message),
            };
        }

        info!(server, latency_ms, "[{server}] Status: OK | Latency: {latency_ms}ms");
        let threshold_ms = i64::try_from(self.high_latency.as_millis()).unwrap_or(i64::MAX);
        let high_latency = latency_ms > threshold_ms;
        if high_latency {
            warn!(server, latency_ms, "[{server}] High latency detected!");
        }

        ProbeOutcome {
            target: probe.target.clone(),
            status: ProbeStatus::Ok,
            latency_ms,
            high_latency,
            error: None,
        }
    }
}

fn object(value: Value) -> ToolParams {
    match value {
        Value::Object(map) => map,
        _ => ToolParams::new(),
    }
}
