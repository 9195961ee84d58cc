//! Error types for tool invocation domain validation.

use thiserror::Error;

/// Errors returned while constructing tool invocation domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToolInvocationDomainError {
    /// The target name is empty after trimming.
    #[error("tool target name must not be empty")]
    EmptyTargetName,

    /// The target name contains characters outside `[a-z0-9_-]`.
    #[error(
        "tool target name '{0}' contains invalid characters (only lowercase alphanumeric, '-' and '_' allowed)"
    )]
    InvalidTargetName(String),

    /// The target name exceeds the 64-character limit.
    #[error("tool target name exceeds 64 character limit: {0}")]
    TargetNameTooLong(String),

    /// The tool name is empty after trimming.
    #[error("Tool name cannot be empty")]
    EmptyToolName,
}
