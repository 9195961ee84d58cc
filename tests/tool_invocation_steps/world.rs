//! Shared world state for tool invocation BDD scenarios.

use async_trait::async_trait;
use graphdesk::tool_invocation::{
    adapters::{RecordingSleeper, memory::InMemoryConnectionRegistry},
    domain::{RetryPolicy, TargetName, ToolName, ToolParams, ToolResult},
    ports::{ToolBackend, ToolBackendError, ToolBackendResult},
    services::{HealthReport, ToolInvocationClient, ToolInvocationError, WorkflowResult},
};
use rstest::fixture;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

/// Backoff unit used by every scenario.
pub const BACKOFF_UNIT: Duration = Duration::from_millis(10);

/// Client type used by the BDD world.
pub type TestClient = ToolInvocationClient<InMemoryConnectionRegistry, RecordingSleeper>;

/// Backend failing a fixed number of times before answering.
pub struct FlakyBackend {
    target: TargetName,
    failures: u32,
    calls: Arc<AtomicU32>,
}

impl FlakyBackend {
    /// Creates a backend failing `failures` times; `calls` counts attempts.
    pub const fn new(target: TargetName, failures: u32, calls: Arc<AtomicU32>) -> Self {
        Self {
            target,
            failures,
            calls,
        }
    }
}

#[async_trait]
impl ToolBackend for FlakyBackend {
    fn target(&self) -> &TargetName {
        &self.target
    }

    async fn connect(&self) -> ToolBackendResult<()> {
        Ok(())
    }

    async fn execute(&self, tool: &ToolName, _params: &ToolParams) -> ToolBackendResult<Value> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.failures {
            return Err(ToolBackendError::Execution(format!(
                "transient failure {call}"
            )));
        }
        Ok(json!({"tool": tool.as_str(), "attempt": call}))
    }
}

/// Scenario world for tool invocation behaviour tests.
pub struct ToolWorld {
    /// Sleeper shared with the client; records backoff delays.
    pub sleeper: RecordingSleeper,
    /// Backends registered before the client is assembled.
    pub backends: Vec<Arc<dyn ToolBackend>>,
    /// Attempt counter shared with flaky backends.
    pub calls: Arc<AtomicU32>,
    /// Client assembled on first use.
    pub client: Option<Arc<TestClient>>,
    /// Result of the last tool call.
    pub last_call: Option<Result<ToolResult, ToolInvocationError>>,
    /// Result of the last workflow.
    pub last_workflow: Option<WorkflowResult<Value>>,
    /// Last health report.
    pub last_report: Option<HealthReport>,
}

impl ToolWorld {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sleeper: RecordingSleeper::new(),
            backends: Vec::new(),
            calls: Arc::new(AtomicU32::new(0)),
            client: None,
            last_call: None,
            last_workflow: None,
            last_report: None,
        }
    }

    /// Returns the client, assembling it from the registered backends on
    /// first use.
    pub fn client(&mut self) -> Arc<TestClient> {
        if let Some(client) = &self.client {
            return Arc::clone(client);
        }
        let client = self.backends.iter().fold(
            ToolInvocationClient::new(
                Arc::new(InMemoryConnectionRegistry::new()),
                Arc::new(self.sleeper.clone()),
                RetryPolicy::new(BACKOFF_UNIT),
            ),
            |client, backend| client.with_backend(Arc::clone(backend)),
        );
        let client = Arc::new(client);
        self.client = Some(Arc::clone(&client));
        client
    }
}

impl Default for ToolWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ToolWorld {
    ToolWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a target name from step text.
pub fn target(name: &str) -> Result<TargetName, eyre::Report> {
    TargetName::new(name).map_err(|err| eyre::eyre!("invalid target '{name}': {err}"))
}
