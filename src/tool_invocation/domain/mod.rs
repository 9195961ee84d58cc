//! Domain model for tool invocation.
//!
//! Covers target and tool identity, invocation outcomes, and the retry
//! policy. Transport and persistence concerns stay outside this boundary.

mod error;
mod ids;
mod result;
mod retry;

pub use error::ToolInvocationDomainError;
pub use ids::{TargetName, ToolName, ToolParams};
pub use result::ToolResult;
pub use retry::RetryPolicy;
