//! Temporary storage and command helpers

use std::path::Path;

use catalog::SeedCatalog;
use clap::Parser;
use shared::AppConfig;
use sparkoch::Args;
use tempfile::TempDir;

/// A storage directory that lives as long as the test
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn storage(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> AppConfig {
        AppConfig {
            storage_dir: self.storage().to_path_buf(),
            ..AppConfig::default()
        }
    }

    /// Parse `argv` as the binary would and run it against the sample data
    pub fn run(&self, argv: &[&str]) -> anyhow::Result<String> {
        let storage = self.storage().display().to_string();
        let mut full = vec!["sparkoch", "--storage-dir", storage.as_str()];
        full.extend_from_slice(argv);
        let args = Args::try_parse_from(full)?;

        let config = args.to_config();
        config.validate()?;
        let mut out = Vec::new();
        sparkoch::run(&config, &args.command, &SeedCatalog, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    pub fn write_script(&self, name: &str, json: &str) -> String {
        let path = self.storage().join(name);
        std::fs::write(&path, json).expect("write script");
        path.display().to_string()
    }
}

/// Script that fills every step and finishes onboarding
pub const FULL_ONBOARDING: &str = r#"[
    {"set": {"field": "firstName", "value": "Anna"}},
    {"set": {"field": "lastName", "value": "Schmidt"}},
    {"set": {"field": "email", "value": "anna.schmidt@example.de"}},
    {"set": {"field": "password", "value": "sicher123"}},
    {"set": {"field": "confirmPassword", "value": "sicher123"}},
    "next",
    {"set": {"field": "postalCode", "value": "10115"}},
    {"set": {"field": "searchRadius", "value": 10}},
    "next",
    {"set": {"field": "dietaryPreference", "value": "vegetarian"}},
    {"set": {"field": "allergens", "value": ["nuts"]}},
    "next",
    {"set": {"field": "weeklyBudget", "value": 120}},
    {"set": {"field": "termsAccepted", "value": true}},
    "complete",
    "enter"
]"#;
