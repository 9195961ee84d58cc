//! OAuth 2.0 login against Microsoft Entra ID and server-side sessions.
//!
//! The login flow is the authorization-code grant for a confidential client:
//! an issued state value is recorded, the user agent is redirected to the
//! provider, and the callback redeems the state and exchanges the code for
//! an access token stored under a fresh session identifier.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
