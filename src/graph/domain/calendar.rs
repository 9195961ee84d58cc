//! Calendar events and the create request.

use super::{EmailAddress, GraphDomainError, RecipientAddress};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Format Graph expects for `dateTime` when `timeZone` is given separately.
const GRAPH_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn utc_zone() -> String {
    "UTC".to_owned()
}

fn required() -> String {
    "required".to_owned()
}

/// Local date-time paired with its time zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeTimeZone {
    /// Date-time without offset.
    pub date_time: String,
    /// IANA or Windows time zone name.
    #[serde(default = "utc_zone")]
    pub time_zone: String,
}

/// Event attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAttendee {
    /// `required`, `optional`, or `resource`.
    #[serde(rename = "type", default = "required")]
    pub kind: String,
    /// Attendee address.
    pub email_address: RecipientAddress,
}

/// Calendar event projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event id.
    pub id: String,
    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,
    /// Start time.
    pub start: DateTimeTimeZone,
    /// End time.
    pub end: DateTimeTimeZone,
    /// Location facet as returned by Graph.
    #[serde(default)]
    pub location: Option<Value>,
    /// Attendees.
    #[serde(default)]
    pub attendees: Vec<EventAttendee>,
}

/// Request to create an event in the signed-in user's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    /// Subject line.
    pub subject: String,
    /// Start time (RFC 3339, any offset).
    pub start_time: DateTime<Utc>,
    /// End time (RFC 3339, any offset).
    pub end_time: DateTime<Utc>,
    /// Required attendees.
    #[serde(default)]
    pub attendees: Vec<EmailAddress>,
    /// HTML body.
    #[serde(default)]
    pub body: Option<String>,
    /// Location display name.
    #[serde(default)]
    pub location: Option<String>,
}

impl CreateEventRequest {
    /// Checks that the event does not end before it starts.
    ///
    /// # Errors
    ///
    /// Returns [`GraphDomainError::EventEndsBeforeStart`] otherwise.
    pub fn validate(&self) -> Result<(), GraphDomainError> {
        if self.end_time < self.start_time {
            return Err(GraphDomainError::EventEndsBeforeStart);
        }
        Ok(())
    }

    /// Builds the `POST /me/events` payload with times in UTC.
    #[must_use]
    pub fn to_graph_payload(&self) -> Value {
        let mut payload = Map::new();
        payload.insert("subject".to_owned(), json!(self.subject));
        payload.insert(
            "body".to_owned(),
            json!({"contentType": "HTML", "content": self.body.as_deref().unwrap_or_default()}),
        );
        payload.insert("start".to_owned(), utc_slot(self.start_time));
        payload.insert("end".to_owned(), utc_slot(self.end_time));
        payload.insert(
            "location".to_owned(),
            json!({"displayName": self.location}),
        );
        if !self.attendees.is_empty() {
            let attendees: Vec<Value> = self
                .attendees
                .iter()
                .map(|address| {
                    json!({"emailAddress": {"address": address.as_str()}, "type": "required"})
                })
                .collect();
            payload.insert("attendees".to_owned(), Value::Array(attendees));
        }
        Value::Object(payload)
    }
}

fn utc_slot(instant: DateTime<Utc>) -> Value {
    json!({
        "dateTime": instant.format(GRAPH_DATE_TIME_FORMAT).to_string(),
        "timeZone": "UTC",
    })
}
