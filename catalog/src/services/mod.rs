//! Item source implementations
//!
//! `SeedCatalog` serves the built-in sample data; `JsonCatalog` reads the
//! same records from a directory of JSON files.

pub mod json;
pub mod seed;

pub use json::JsonCatalog;
pub use seed::SeedCatalog;
