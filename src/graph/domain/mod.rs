//! Resource projections and request payloads for Microsoft Graph.
//!
//! Projections mirror the Graph JSON shape (camelCase fields); unknown
//! fields are ignored and nothing is cached locally.

mod calendar;
mod drive;
mod email;
mod error;
mod mail;
mod page;
mod user;

pub use calendar::{CreateEventRequest, DateTimeTimeZone, Event, EventAttendee};
pub use drive::{DriveFolder, FileItem, UploadName, is_dot_segment};
pub use email::EmailAddress;
pub use error::GraphDomainError;
pub use mail::{Message, MessageBody, Recipient, RecipientAddress, SendMessageRequest};
pub use page::PageSize;
pub use user::UserProfile;

use serde::Deserialize;

/// Graph collection envelope (`{"value": [...]}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Collection<T> {
    /// Items of the collection.
    #[serde(default)]
    pub value: Vec<T>,
}
