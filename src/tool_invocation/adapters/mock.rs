//! Canned tool backend used when no real target endpoint is configured.

use crate::tool_invocation::{
    domain::{TargetName, ToolName, ToolParams},
    ports::{ToolBackend, ToolBackendError, ToolBackendResult},
};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::time::Duration;

/// Canned response for one mocked tool.
#[derive(Debug, Clone, PartialEq)]
struct MockTool {
    required_params: Vec<String>,
    response: Value,
}

/// Tool backend answering from a fixed catalog of canned responses.
///
/// Tools absent from the catalog answer with a generic payload. A tool may
/// declare required parameters; calls missing one are rejected as invalid
/// parameters.
#[derive(Debug, Clone)]
pub struct MockToolBackend {
    target: TargetName,
    catalog: HashMap<String, MockTool>,
    latency: Duration,
    connect_failure: Option<String>,
}

impl MockToolBackend {
    /// Creates a mock backend for `target` with an empty catalog.
    #[must_use]
    pub fn new(target: TargetName) -> Self {
        Self {
            target,
            catalog: HashMap::new(),
            latency: Duration::ZERO,
            connect_failure: None,
        }
    }

    /// Creates the mock code-hosting backend.
    #[must_use]
    pub fn github() -> Self {
        Self::new(TargetName::github())
            .with_tool(
                "search_repositories",
                json!({"items": [{"name": "ms-graph-api-demo"}]}),
            )
            .with_required_tool(
                "get_file_contents",
                ["path"],
                json!({"content": "Mock file content"}),
            )
    }

    /// Creates the mock test-orchestration backend.
    #[must_use]
    pub fn testsprite() -> Self {
        Self::new(TargetName::testsprite())
            .with_tool("testsprite_bootstrap", json!({"status": "ready"}))
            .with_tool(
                "testsprite_generate_backend_test_plan",
                json!({"plan_id": "plan-123", "tests": ["test_auth", "test_user"]}),
            )
    }

    /// Adds a tool answering with `response`.
    #[must_use]
    pub fn with_tool(self, name: impl Into<String>, response: Value) -> Self {
        self.with_required_tool(name, std::iter::empty::<String>(), response)
    }

    /// Adds a tool that requires the given parameters.
    #[must_use]
    pub fn with_required_tool(
        mut self,
        name: impl Into<String>,
        required_params: impl IntoIterator<Item = impl Into<String>>,
        response: Value,
    ) -> Self {
        self.catalog.insert(
            name.into(),
            MockTool {
                required_params: required_params.into_iter().map(Into::into).collect(),
                response,
            },
        );
        self
    }

    /// Simulates per-call latency.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes every connection attempt fail with `message`.
    #[must_use]
    pub fn with_connect_failure(mut self, message: impl Into<String>) -> Self {
        self.connect_failure = Some(message.into());
        self
    }
}

#[async_trait]
impl ToolBackend for MockToolBackend {
    fn target(&self) -> &TargetName {
        &self.target
    }

    async fn connect(&self) -> ToolBackendResult<()> {
        match &self.connect_failure {
            Some(message) => Err(ToolBackendError::Connection(message.clone())),
            None => Ok(()),
        }
    }

    async fn execute(&self, tool: &ToolName, params: &ToolParams) -> ToolBackendResult<Value> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let Some(entry) = self.catalog.get(tool.as_str()) else {
            return Ok(json!({"mock": "generic_response"}));
        };

        if let Some(missing) = entry
            .required_params
            .iter()
            .find(|param| !params.contains_key(param.as_str()))
        {
            return Err(ToolBackendError::InvalidParams(format!(
                "Missing {missing} parameter"
            )));
        }

        Ok(entry.response.clone())
    }
}
