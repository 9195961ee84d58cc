//! Adapter implementations for Graph ports.

pub mod http;
