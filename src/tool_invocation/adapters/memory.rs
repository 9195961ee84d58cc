//! In-memory connection registry.

use crate::tool_invocation::{
    domain::TargetName,
    ports::{ConnectionRegistry, ConnectionRegistryError, ConnectionRegistryResult},
};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory set of connected targets.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConnectionRegistry {
    connected: Arc<RwLock<BTreeSet<TargetName>>>,
}

impl InMemoryConnectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn mark_connected(&self, target: &TargetName) -> ConnectionRegistryResult<()> {
        let mut connected = self.connected.write().map_err(|err| {
            ConnectionRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        connected.insert(target.clone());
        Ok(())
    }

    async fn is_connected(&self, target: &TargetName) -> ConnectionRegistryResult<bool> {
        let connected = self.connected.read().map_err(|err| {
            ConnectionRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(connected.contains(target))
    }

    async fn connected_targets(&self) -> ConnectionRegistryResult<Vec<TargetName>> {
        let connected = self.connected.read().map_err(|err| {
            ConnectionRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(connected.iter().cloned().collect())
    }
}
