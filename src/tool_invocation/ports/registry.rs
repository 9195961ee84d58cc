//! Registry port tracking which tool targets are connected.

use crate::tool_invocation::domain::TargetName;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for connection registry operations.
pub type ConnectionRegistryResult<T> = Result<T, ConnectionRegistryError>;

/// Store of connected tool targets.
///
/// Targets are only ever added; there is no disconnect operation.
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Records `target` as connected.
    async fn mark_connected(&self, target: &TargetName) -> ConnectionRegistryResult<()>;

    /// Returns whether `target` is connected.
    async fn is_connected(&self, target: &TargetName) -> ConnectionRegistryResult<bool>;

    /// Returns all connected targets in name order.
    async fn connected_targets(&self) -> ConnectionRegistryResult<Vec<TargetName>>;
}

/// Errors returned by connection registry implementations.
#[derive(Debug, Clone, Error)]
pub enum ConnectionRegistryError {
    /// Persistence-layer failure.
    #[error("connection registry error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConnectionRegistryError {
    /// Wraps a persistence-layer failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
