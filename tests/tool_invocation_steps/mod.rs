//! Step definitions for tool invocation scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
