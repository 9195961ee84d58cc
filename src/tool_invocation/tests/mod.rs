//! Unit tests for tool invocation.

mod client_tests;
