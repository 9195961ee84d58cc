//! Suspension port used between retry attempts.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the calling task for a backoff delay.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Waits for `duration` without blocking other tasks.
    async fn sleep(&self, duration: Duration);
}
