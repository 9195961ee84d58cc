//! Mail messages and the send request.

use super::{EmailAddress, GraphDomainError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Address part of a recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientAddress {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// SMTP address.
    pub address: String,
}

/// Message sender or recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    /// Address of the recipient.
    pub email_address: RecipientAddress,
}

/// Message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody {
    /// `HTML` or `Text`.
    pub content_type: String,
    /// Body content.
    pub content: String,
}

/// Mail message projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message id.
    pub id: String,
    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,
    /// First characters of the body.
    #[serde(default)]
    pub body_preview: Option<String>,
    /// Full body.
    #[serde(default)]
    pub body: Option<MessageBody>,
    /// Account that sent the message.
    #[serde(default)]
    pub sender: Option<Recipient>,
    /// Mailbox owner the message was sent from.
    #[serde(default)]
    pub from: Option<Recipient>,
    /// Primary recipients.
    #[serde(default)]
    pub to_recipients: Vec<Recipient>,
    /// Receive timestamp.
    #[serde(default)]
    pub received_date_time: Option<DateTime<Utc>>,
    /// Read flag.
    #[serde(default)]
    pub is_read: Option<bool>,
}

fn default_content_type() -> String {
    "HTML".to_owned()
}

/// Request to send a new message from the signed-in mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// Recipient addresses.
    pub to: Vec<EmailAddress>,
    /// Subject line.
    pub subject: String,
    /// Body content.
    pub body: String,
    /// Body content type.
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

impl SendMessageRequest {
    /// Checks that the request names at least one recipient.
    ///
    /// # Errors
    ///
    /// Returns [`GraphDomainError::NoRecipients`] for an empty `to` list.
    pub fn validate(&self) -> Result<(), GraphDomainError> {
        if self.to.is_empty() {
            return Err(GraphDomainError::NoRecipients);
        }
        Ok(())
    }

    /// Builds the `sendMail` payload.
    #[must_use]
    pub fn to_graph_payload(&self) -> Value {
        let recipients: Vec<Value> = self
            .to
            .iter()
            .map(|address| json!({"emailAddress": {"address": address.as_str()}}))
            .collect();
        json!({
            "message": {
                "subject": self.subject,
                "body": {"contentType": self.content_type, "content": self.body},
                "toRecipients": recipients,
            },
            "saveToSentItems": true,
        })
    }
}
