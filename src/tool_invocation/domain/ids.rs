//! Identifier and validated-name types for tool targets and tools.

use super::ToolInvocationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a tool target name.
const MAX_TARGET_NAME_LENGTH: usize = 64;

/// Parameter mapping passed to a tool.
pub type ToolParams = serde_json::Map<String, serde_json::Value>;

/// Validated name of a logical tool target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetName(String);

impl TargetName {
    /// Name of the code-hosting target.
    pub const GITHUB: &'static str = "github";

    /// Name of the test-orchestration target.
    pub const TESTSPRITE: &'static str = "testsprite";

    /// Creates a validated target name.
    ///
    /// The input is trimmed and lowercased. Only characters in `[a-z0-9_-]`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ToolInvocationDomainError`] when validation fails.
    pub fn new(value: impl Into<String>) -> Result<Self, ToolInvocationDomainError> {
        let normalized = value.into().trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(ToolInvocationDomainError::EmptyTargetName);
        }

        let is_valid = normalized.chars().all(|character| {
            character.is_ascii_lowercase()
                || character.is_ascii_digit()
                || character == '_'
                || character == '-'
        });
        if !is_valid {
            return Err(ToolInvocationDomainError::InvalidTargetName(normalized));
        }

        if normalized.len() > MAX_TARGET_NAME_LENGTH {
            return Err(ToolInvocationDomainError::TargetNameTooLong(normalized));
        }

        Ok(Self(normalized))
    }

    /// Returns the code-hosting target name.
    #[must_use]
    pub fn github() -> Self {
        Self(Self::GITHUB.to_owned())
    }

    /// Returns the test-orchestration target name.
    #[must_use]
    pub fn testsprite() -> Self {
        Self(Self::TESTSPRITE.to_owned())
    }

    /// Returns the target name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TargetName {
    type Error = ToolInvocationDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TargetName> for String {
    fn from(value: TargetName) -> Self {
        value.0
    }
}

impl AsRef<str> for TargetName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Validated, non-empty tool name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolName(String);

impl ToolName {
    /// Creates a validated tool name.
    ///
    /// # Errors
    ///
    /// Returns [`ToolInvocationDomainError::EmptyToolName`] when the name is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ToolInvocationDomainError> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(ToolInvocationDomainError::EmptyToolName);
        }
        Ok(Self(normalized))
    }

    /// Returns the tool name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ToolName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
