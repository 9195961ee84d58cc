//! Workflows composed from several tool calls.

use super::client::{ToolInvocationClient, ToolInvocationError};
use crate::tool_invocation::{
    domain::{TargetName, ToolParams},
    ports::{ConnectionRegistry, Sleeper},
};
use serde_json::{Value, json};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Port used by the test runner workflow when bootstrapping a backend project.
const BOOTSTRAP_LOCAL_PORT: u16 = 8000;

/// Errors raised by workflows.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A tool call inside the workflow failed.
    #[error("{0}")]
    BusinessLogic(String),

    /// The invocation client raised a connection error.
    #[error(transparent)]
    Invocation(#[from] ToolInvocationError),
}

/// Result type for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Targets addressed by the workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowTargets {
    /// Target hosting source repositories.
    pub repository: TargetName,
    /// Target orchestrating test runs.
    pub testing: TargetName,
}

impl Default for WorkflowTargets {
    fn default() -> Self {
        Self {
            repository: TargetName::github(),
            testing: TargetName::testsprite(),
        }
    }
}

/// High-level workflows built on the invocation client.
pub struct ToolWorkflows<R, S>
where
    R: ConnectionRegistry,
    S: Sleeper,
{
    client: Arc<ToolInvocationClient<R, S>>,
    targets: WorkflowTargets,
}

impl<R, S> ToolWorkflows<R, S>
where
    R: ConnectionRegistry,
    S: Sleeper,
{
    /// Creates the workflows over `client`.
    #[must_use]
    pub const fn new(client: Arc<ToolInvocationClient<R, S>>, targets: WorkflowTargets) -> Self {
        Self { client, targets }
    }

    /// Searches the repository target for `repo_name` and returns the
    /// matches.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::BusinessLogic`] when the search fails and
    /// [`WorkflowError::Invocation`] when the target is not connected.
    pub async fn sync_repo_state(&self, repo_name: &str) -> WorkflowResult<Value> {
        info!(repo = repo_name, "syncing repository state");
        let result = self
            .client
            .call(
                &self.targets.repository,
                "search_repositories",
                params(json!({"query": repo_name})),
            )
            .await?;

        if !result.is_success() {
            return Err(WorkflowError::BusinessLogic(format!(
                "Repo sync failed: {}",
                result.error().unwrap_or_default()
            )));
        }
        Ok(result.into_data().unwrap_or(Value::Null))
    }

    /// Bootstraps the testing target for `project_path` and generates a
    /// backend test plan.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::BusinessLogic`] when bootstrap or plan
    /// generation fails; plan generation is skipped when bootstrap fails.
    pub async fn run_test_suite(&self, project_path: &str) -> WorkflowResult<Value> {
        info!(project = project_path, "running test suite");

        let bootstrap = self
            .client
            .call(
                &self.targets.testing,
                "testsprite_bootstrap",
                params(json!({
                    "projectPath": project_path,
                    "localPort": BOOTSTRAP_LOCAL_PORT,
                    "type": "backend",
                })),
            )
            .await?;
        if !bootstrap.is_success() {
            return Err(WorkflowError::BusinessLogic(format!(
                "Bootstrap failed: {}",
                bootstrap.error().unwrap_or_default()
            )));
        }

        let plan = self
            .client
            .call(
                &self.targets.testing,
                "testsprite_generate_backend_test_plan",
                params(json!({"projectPath": project_path})),
            )
            .await?;
        if !plan.is_success() {
            return Err(WorkflowError::BusinessLogic(format!(
                "Test plan generation failed: {}",
                plan.error().unwrap_or_default()
            )));
        }
        Ok(plan.into_data().unwrap_or(Value::Null))
    }
}

fn params(value: Value) -> ToolParams {
    match value {
        Value::Object(map) => map,
        _ => ToolParams::new(),
    }
}
