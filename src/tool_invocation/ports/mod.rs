//! Port contracts for tool invocation.

mod backend;
mod registry;
mod sleeper;

pub use backend::{ToolBackend, ToolBackendError, ToolBackendResult};
pub use registry::{ConnectionRegistry, ConnectionRegistryError, ConnectionRegistryResult};
pub use sleeper::Sleeper;
