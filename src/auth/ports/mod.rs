//! Port contracts for the login flow.

mod identity;
mod session_store;
mod state_store;

pub use identity::{IdentityProvider, IdentityProviderError, IdentityProviderResult};
pub use session_store::{SessionStore, SessionStoreError, SessionStoreResult};
pub use state_store::PendingStateStore;
