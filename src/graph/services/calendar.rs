//! Calendar service.

use super::GraphServiceResult;
use crate::graph::{
    domain::{Collection, CreateEventRequest, Event, PageSize},
    ports::{GraphApi, GraphRequest},
};
use std::sync::Arc;

/// Lists and creates events in the signed-in user's calendar.
pub struct CalendarService<G: GraphApi> {
    api: Arc<G>,
}

impl<G: GraphApi> CalendarService<G> {
    /// Creates the service.
    #[must_use]
    pub const fn new(api: Arc<G>) -> Self {
        Self { api }
    }

    /// Lists events ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns the Graph error unchanged.
    pub async fn list_events(&self, top: PageSize) -> GraphServiceResult<Vec<Event>> {
        let request = GraphRequest::get("/me/events")
            .with_query("$top", top.to_string())
            .with_query("$orderby", "start/dateTime");
        let collection: Collection<Event> = self.api.send(request).await?.into_json()?;
        Ok(collection.value)
    }

    /// Creates an event and returns it as stored by Graph.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the event ends before it starts, or
    /// the Graph error.
    pub async fn create_event(&self, request: &CreateEventRequest) -> GraphServiceResult<Event> {
        request.validate()?;
        let payload = self
            .api
            .send(GraphRequest::post("/me/events", request.to_graph_payload()))
            .await?;
        Ok(payload.into_json()?)
    }
}
