//! Service implementations
//!
//! Real implementations of the collaborator traits.

pub mod local_storage;
pub mod navigator;

pub use local_storage::{LocalStorageSink, USER_KEY};
pub use navigator::LoggingNavigator;
