//! Common test utilities for CLI integration tests

pub mod fixtures;

pub use fixtures::*;
