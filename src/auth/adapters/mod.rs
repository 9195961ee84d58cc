//! Adapter implementations for auth ports.

pub mod entra;
pub mod memory;
