//! Graphdesk: a Microsoft Graph proxy backend and a retrying tool-invocation
//! harness.
//!
//! The crate hosts two independent subsystems that share only the ambient
//! stack (configuration, logging, error conventions):
//!
//! - a REST proxy exposing mail, calendar, drive, and profile endpoints on
//!   top of Microsoft Graph, guarded by an OAuth authorization-code login and
//!   server-side sessions;
//! - a client that invokes named tools on logical targets with bounded
//!   exponential backoff, plus workflows and a health monitor built on it.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`auth`]: OAuth login flow and sessions
//! - [`graph`]: Graph resource projections, client, and services
//! - [`http`]: axum router and handlers
//! - [`tool_invocation`]: Retrying tool client, workflows, health checks
//! - [`config`]: CLI and environment settings
//! - [`telemetry`]: Tracing set-up

pub mod auth;
pub mod config;
pub mod graph;
pub mod http;
pub mod telemetry;
pub mod tool_invocation;
