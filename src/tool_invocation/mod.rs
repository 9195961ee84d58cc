//! Retrying tool invocation against logical tool targets.
//!
//! A tool target is a logical backend (a code-hosting service, a test
//! orchestration service) that exposes named tools. Callers connect a target
//! once and then invoke tools on it; transient failures are retried with
//! exponential backoff while validation failures are returned immediately.
//! The module follows hexagonal architecture:
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
