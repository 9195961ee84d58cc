//! Outcome of a single tool invocation.

use serde::Serialize;
use serde_json::Value;

/// Immutable outcome of a tool invocation.
///
/// A successful result carries an optional payload and never an error; a
/// failed result always carries an error message and never a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ToolResult {
    /// Creates a successful result carrying `data`.
    #[must_use]
    pub const fn success(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Creates a failed result carrying an error message.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Returns whether the invocation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the payload of a successful invocation.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Returns the error message of a failed invocation.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Consumes the result and returns the payload.
    #[must_use]
    pub fn into_data(self) -> Option<Value> {
        self.data
    }
}
