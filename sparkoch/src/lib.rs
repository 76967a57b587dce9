//! Command-line front end for the sparkoch grocery-savings app
//!
//! Wires the item sources, the catalog engine and the onboarding flow
//! together. Only the binary initialises logging.

pub mod args;
pub mod commands;
pub mod history;
pub mod render;
pub mod script;

use catalog::{ItemSource, JsonCatalog, SeedCatalog};
use shared::AppConfig;

// Re-export commonly used types
pub use args::{Args, Command, ItemKind, ViewArgs};
pub use commands::run;
pub use script::{parse_script, run_actions, ScriptAction, ScriptReport};

/// JSON files from the data directory, or the built-in sample data
pub fn item_source(config: &AppConfig) -> Box<dyn ItemSource> {
    match &config.data_dir {
        Some(dir) => Box::new(JsonCatalog::new(dir)),
        None => Box::new(SeedCatalog),
    }
}
