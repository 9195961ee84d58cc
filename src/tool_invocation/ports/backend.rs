//! Backend port executing tools for one logical target.

use crate::tool_invocation::domain::{TargetName, ToolName, ToolParams};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for tool backend operations.
pub type ToolBackendResult<T> = Result<T, ToolBackendError>;

/// Execution contract for a single tool target.
///
/// Each logical target is served by exactly one implementation, selected by
/// configuration when the invocation client is assembled.
#[async_trait]
pub trait ToolBackend: Send + Sync {
    /// Returns the target this backend serves.
    fn target(&self) -> &TargetName;

    /// Establishes the connection to the target.
    async fn connect(&self) -> ToolBackendResult<()>;

    /// Executes one tool call and returns its payload.
    async fn execute(&self, tool: &ToolName, params: &ToolParams) -> ToolBackendResult<Value>;
}

/// Errors returned by tool backend adapters.
#[derive(Debug, Clone, Error)]
pub enum ToolBackendError {
    /// The call parameters were rejected. Never retried.
    #[error("{0}")]
    InvalidParams(String),

    /// The target could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The tool ran and reported a failure.
    #[error("{0}")]
    Execution(String),

    /// The transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ToolBackendError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns whether the failure may succeed on a later attempt.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        !matches!(self, Self::InvalidParams(_))
    }
}
