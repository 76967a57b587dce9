//! Common test utilities for onboarding tests

pub mod fixtures;

pub use fixtures::{FlowBuilder, TestFixtures};
