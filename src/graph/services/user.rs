//! Signed-in user profile service.

use super::GraphServiceResult;
use crate::graph::{
    domain::UserProfile,
    ports::{GraphApi, GraphRequest},
};
use std::sync::Arc;

/// Reads the signed-in user's profile.
pub struct UserService<G: GraphApi> {
    api: Arc<G>,
}

impl<G: GraphApi> UserService<G> {
    /// Creates the service.
    #[must_use]
    pub const fn new(api: Arc<G>) -> Self {
        Self { api }
    }

    /// Returns the profile from `GET /me`.
    ///
    /// # Errors
    ///
    /// Returns the Graph error unchanged.
    pub async fn get_me(&self) -> GraphServiceResult<UserProfile> {
        let payload = self.api.send(GraphRequest::get("/me")).await?;
        Ok(payload.into_json()?)
    }
}
