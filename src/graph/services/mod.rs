//! Per-resource Graph services shaping requests and responses.

mod calendar;
mod drive;
mod error;
mod mail;
mod user;

pub use calendar::CalendarService;
pub use drive::DriveService;
pub use error::{GraphServiceError, GraphServiceResult};
pub use mail::MailService;
pub use user::UserService;

use crate::graph::domain::{GraphDomainError, is_dot_segment};

/// Percent-encodes one path segment.
///
/// Empty and dot segments are rejected; URL parsing would otherwise collapse
/// them and move the request outside the addressed resource.
fn segment(value: &str) -> Result<String, GraphDomainError> {
    if value.is_empty() || is_dot_segment(value) {
        return Err(GraphDomainError::InvalidPathSegment(value.to_owned()));
    }
    Ok(urlencoding::encode(value).into_owned())
}
