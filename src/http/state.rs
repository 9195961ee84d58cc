//! Shared application state handed to every handler.

use crate::auth::{
    adapters::{
        entra::EntraIdentityProvider,
        memory::{InMemoryPendingStateStore, InMemorySessionStore},
    },
    domain::Session,
    services::AuthService,
};
use crate::config::Settings;
use crate::graph::adapters::http::{GraphClientFactory, HttpGraphClient};
use mockable::DefaultClock;
use std::sync::Arc;

/// Login service wired with the production adapters.
pub type WebAuthService = AuthService<
    InMemorySessionStore,
    InMemoryPendingStateStore,
    EntraIdentityProvider,
    DefaultClock,
>;

/// State shared by the router.
#[derive(Clone)]
pub struct AppState {
    auth: Arc<WebAuthService>,
    graph: GraphClientFactory,
}

impl AppState {
    /// Creates the state from its parts.
    #[must_use]
    pub const fn new(auth: Arc<WebAuthService>, graph: GraphClientFactory) -> Self {
        Self { auth, graph }
    }

    /// Wires in-memory stores, the Entra provider, and the Graph client
    /// factory around one shared HTTP client.
    #[must_use]
    pub fn from_settings(settings: &Settings, http: reqwest::Client) -> Self {
        let identity = EntraIdentityProvider::new(settings.entra_config(), http.clone());
        let auth = AuthService::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(InMemoryPendingStateStore::new()),
            Arc::new(identity),
            Arc::new(DefaultClock),
            settings.session_ttl(),
        );
        let graph = GraphClientFactory::new(http, &settings.graph_api_endpoint);
        Self::new(Arc::new(auth), graph)
    }

    /// Returns the login service.
    #[must_use]
    pub fn auth(&self) -> &WebAuthService {
        &self.auth
    }

    /// Returns a Graph client acting for the session's user.
    #[must_use]
    pub fn graph_for(&self, session: &Session) -> Arc<HttpGraphClient> {
        Arc::new(self.graph.for_bearer(session.access_token().secret()))
    }
}
