//! Application services for tool invocation.

mod client;
mod health;
mod workflows;

pub use client::{ToolInvocationClient, ToolInvocationError, ToolInvocationResult};
pub use health::{
    DEFAULT_HIGH_LATENCY, HealthMonitor, HealthProbe, HealthReport, ProbeOutcome, ProbeStatus,
};
pub use workflows::{ToolWorkflows, WorkflowError, WorkflowResult, WorkflowTargets};
