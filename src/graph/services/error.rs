//! Service-level error for Graph resource services.

use crate::graph::{domain::GraphDomainError, ports::GraphApiError};
use thiserror::Error;

/// Errors raised by Graph resource services.
#[derive(Debug, Error)]
pub enum GraphServiceError {
    /// The request payload failed validation.
    #[error(transparent)]
    Validation(#[from] GraphDomainError),

    /// Graph answered with an error or was unreachable.
    #[error(transparent)]
    Api(#[from] GraphApiError),
}

/// Result type for Graph resource services.
pub type GraphServiceResult<T> = Result<T, GraphServiceError>;
