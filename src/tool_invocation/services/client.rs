//! Retrying tool invocation client.

use crate::tool_invocation::{
    domain::{RetryPolicy, TargetName, ToolName, ToolParams, ToolResult},
    ports::{ConnectionRegistry, ConnectionRegistryError, Sleeper, ToolBackend},
};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Errors raised by the invocation client.
///
/// Tool failures are not errors: they are returned as failed
/// [`ToolResult`]s. Only connection problems are raised.
#[derive(Debug, Error)]
pub enum ToolInvocationError {
    /// The target has not been connected.
    #[error("Server {0} not connected")]
    NotConnected(TargetName),

    /// No backend is configured for the target.
    #[error("no backend configured for target {0}")]
    UnknownTarget(TargetName),

    /// The connection step failed.
    #[error("Connection failed for {target}: {reason}")]
    ConnectionFailed {
        /// Target that failed to connect.
        target: TargetName,
        /// Failure description from the backend.
        reason: String,
    },

    /// The connection registry failed.
    #[error(transparent)]
    Registry(#[from] ConnectionRegistryError),
}

impl ToolInvocationError {
    /// Returns whether the error reports an unreachable or unregistered
    /// target.
    #[must_use]
    pub const fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::NotConnected(_) | Self::UnknownTarget(_) | Self::ConnectionFailed { .. }
        )
    }
}

/// Result type for invocation client operations.
pub type ToolInvocationResult<T> = Result<T, ToolInvocationError>;

/// Client invoking tools on connected targets with bounded retry.
pub struct ToolInvocationClient<R, S>
where
    R: ConnectionRegistry,
    S: Sleeper,
{
    registry: Arc<R>,
    sleeper: Arc<S>,
    policy: RetryPolicy,
    backends: HashMap<TargetName, Arc<dyn ToolBackend>>,
}

impl<R, S> ToolInvocationClient<R, S>
where
    R: ConnectionRegistry,
    S: Sleeper,
{
    /// Creates a client with no backends.
    #[must_use]
    pub fn new(registry: Arc<R>, sleeper: Arc<S>, policy: RetryPolicy) -> Self {
        Self {
            registry,
            sleeper,
            policy,
            backends: HashMap::new(),
        }
    }

    /// Adds the backend serving its target, replacing any previous one.
    #[must_use]
    pub fn with_backend(mut self, backend: Arc<dyn ToolBackend>) -> Self {
        self.backends.insert(backend.target().clone(), backend);
        self
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Returns the targets that have a backend, in name order.
    #[must_use]
    pub fn configured_targets(&self) -> Vec<TargetName> {
        let mut targets: Vec<TargetName> = self.backends.keys().cloned().collect();
        targets.sort();
        targets
    }

    fn backend_for(&self, target: &TargetName) -> ToolInvocationResult<&Arc<dyn ToolBackend>> {
        self.backends
            .get(target)
            .ok_or_else(|| ToolInvocationError::UnknownTarget(target.clone()))
    }

    /// Connects `target` and records it in the connection registry.
    ///
    /// # Errors
    ///
    /// Returns [`ToolInvocationError::UnknownTarget`] when no backend serves
    /// the target, [`ToolInvocationError::ConnectionFailed`] when the backend
    /// cannot connect (the target is then left unregistered), or registry
    /// errors.
    pub async fn connect(&self, target: &TargetName) -> ToolInvocationResult<()> {
        let backend = self.backend_for(target)?;
        info!(server = %target, "connecting to tool server");

        if let Err(err) = backend.connect().await {
            error!(server = %target, error = %err, "failed to connect to tool server");
            return Err(ToolInvocationError::ConnectionFailed {
                target: target.clone(),
                reason: err.to_string(),
            });
        }

        self.registry.mark_connected(target).await?;
        info!(server = %target, "connected to tool server");
        Ok(())
    }

    /// Invokes `tool_name` on `target`.
    ///
    /// An empty tool name yields a failed result without any attempt.
    /// Transient failures are retried up to the policy ceiling with
    /// exponential backoff; when attempts are exhausted the last error is
    /// returned as a failed result.
    ///
    /// # Errors
    ///
    /// Returns [`ToolInvocationError::NotConnected`] when the target is not in
    /// the connection registry, and registry errors. No attempt is made in
    /// either case.
    pub async fn call(
        &self,
        target: &TargetName,
        tool_name: &str,
        params: ToolParams,
    ) -> ToolInvocationResult<ToolResult> {
        if !self.registry.is_connected(target).await? {
            return Err(ToolInvocationError::NotConnected(target.clone()));
        }
        let backend = self.backend_for(target)?;

        info!(server = %target, tool = tool_name, attempt = 1_u32, "calling tool");
        let tool = match ToolName::new(tool_name) {
            Ok(tool) => tool,
            Err(err) => {
                error!(server = %target, error = %err, "validation error");
                return Ok(ToolResult::failure(err.to_string()));
            }
        };

        let mut attempt: u32 = 0;
        loop {
            match backend.execute(&tool, &params).await {
                Ok(payload) => return Ok(ToolResult::success(payload)),
                Err(err) if !err.is_retryable() => {
                    error!(server = %target, tool = %tool, error = %err, "validation error");
                    return Ok(ToolResult::failure(err.to_string()));
                }
                Err(err) if self.policy.is_final_attempt(attempt) => {
                    error!(
                        server = %target,
                        tool = %tool,
                        error = %err,
                        "max retries reached"
                    );
                    return Ok(ToolResult::failure(err.to_string()));
                }
                Err(err) => {
                    let delay = self.policy.delay_after(attempt);
                    warn!(
                        server = %target,
                        tool = %tool,
                        error = %err,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        "retryable error, retrying"
                    );
                    self.sleeper.sleep(delay).await;
                    attempt = attempt.saturating_add(1);
                    info!(
                        server = %target,
                        tool = %tool,
                        attempt = attempt.saturating_add(1),
                        "calling tool"
                    );
                }
            }
        }
    }
}
