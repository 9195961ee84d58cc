//! Mailbox service.

use super::{GraphServiceResult, segment};
use crate::graph::{
    domain::{Collection, Message, PageSize, SendMessageRequest},
    ports::{GraphApi, GraphRequest},
};
use std::sync::Arc;
use tracing::info;

/// Lists, reads, and sends messages for the signed-in user.
pub struct MailService<G: GraphApi> {
    api: Arc<G>,
}

impl<G: GraphApi> MailService<G> {
    /// Creates the service.
    #[must_use]
    pub const fn new(api: Arc<G>) -> Self {
        Self { api }
    }

    /// Lists the newest messages first.
    ///
    /// # Errors
    ///
    /// Returns the Graph error unchanged.
    pub async fn list_messages(&self, top: PageSize) -> GraphServiceResult<Vec<Message>> {
        let request = GraphRequest::get("/me/messages")
            .with_query("$top", top.to_string())
            .with_query("$orderby", "receivedDateTime desc");
        let collection: Collection<Message> = self.api.send(request).await?.into_json()?;
        Ok(collection.value)
    }

    /// Returns one message.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty or dot-segment id, or the
    /// Graph error unchanged (404 for unknown ids).
    pub async fn get_message(&self, message_id: &str) -> GraphServiceResult<Message> {
        let path = format!("/me/messages/{}", segment(message_id)?);
        Ok(self.api.send(GraphRequest::get(path)).await?.into_json()?)
    }

    /// Sends a message and saves it to Sent Items.
    ///
    /// # Errors
    ///
    /// Returns a validation error for requests without recipients, or the
    /// Graph error.
    pub async fn send_message(&self, request: &SendMessageRequest) -> GraphServiceResult<()> {
        request.validate()?;
        self.api
            .send(GraphRequest::post("/me/sendMail", request.to_graph_payload()))
            .await?;
        info!(recipients = request.to.len(), "message sent");
        Ok(())
    }
}
