//! Bounded exponential backoff policy for tool invocation.

use std::time::Duration;

/// Retry policy applied to transient tool failures.
///
/// Attempts are indexed from zero. After a failed attempt `i` that is not the
/// final one, the caller waits `unit * 2^i` before trying again, so the
/// delays for the three-attempt ceiling are one and two units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    unit: Duration,
}

impl RetryPolicy {
    /// Fixed number of attempts per tool call.
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Default backoff unit.
    pub const DEFAULT_UNIT: Duration = Duration::from_secs(1);

    /// Creates a policy with the given backoff unit.
    #[must_use]
    pub const fn new(unit: Duration) -> Self {
        Self {
            max_attempts: Self::MAX_ATTEMPTS,
            unit,
        }
    }

    /// Returns the maximum number of attempts.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the backoff unit.
    #[must_use]
    pub const fn unit(&self) -> Duration {
        self.unit
    }

    /// Returns whether `attempt` (0-based) is the last one allowed.
    #[must_use]
    pub const fn is_final_attempt(&self, attempt: u32) -> bool {
        attempt.saturating_add(1) >= self.max_attempts
    }

    /// Returns the delay to wait after the failed attempt `attempt`.
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 2_u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.unit.saturating_mul(factor)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_UNIT)
    }
}
