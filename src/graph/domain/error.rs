//! Validation errors for Graph request payloads.

use thiserror::Error;

/// Errors returned while validating Graph request payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphDomainError {
    /// The value is not a plausible e-mail address.
    #[error("invalid e-mail address: {0}")]
    InvalidEmailAddress(String),

    /// A message must have at least one recipient.
    #[error("at least one recipient is required")]
    NoRecipients,

    /// The event ends before it starts.
    #[error("event end time must not precede start time")]
    EventEndsBeforeStart,

    /// The upload file name is empty or contains a path separator.
    #[error("invalid file name: '{0}'")]
    InvalidFileName(String),

    /// A path segment is empty or a `.`/`..` dot segment.
    #[error("invalid path segment: '{0}'")]
    InvalidPathSegment(String),
}
