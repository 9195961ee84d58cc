//! Unit tests for the Graph module.
