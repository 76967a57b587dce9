//! Application configuration shared by the catalog, onboarding flow and CLI

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// How boundary strings that name a sort key are treated when they are unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Reject unknown keys with an error
    Strict,
    /// Fall back to relevance ordering and log a warning
    Lenient,
}

impl ParsePolicy {
    /// Strict in debug builds, lenient in release builds
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            ParsePolicy::Strict
        } else {
            ParsePolicy::Lenient
        }
    }
}

impl Default for ParsePolicy {
    fn default() -> Self {
        Self::for_build()
    }
}

impl fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePolicy::Strict => write!(f, "strict"),
            ParsePolicy::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for ParsePolicy {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(ParsePolicy::Strict),
            "lenient" => Ok(ParsePolicy::Lenient),
            _ => Err(SharedError::InvalidConfig {
                field: "parse_policy".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory with offers.json, recipes.json, stores.json and shopping_list.json;
    /// the built-in sample data is used when unset
    pub data_dir: Option<PathBuf>,
    /// Directory backing the local key-value storage
    pub storage_dir: PathBuf,
    pub log_level: String,
    pub parse_policy: ParsePolicy,
    /// Results per page for incremental loading
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_dir: PathBuf::from("./storage"),
            log_level: "info".to_string(),
            parse_policy: ParsePolicy::for_build(),
            page_size: 6,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> SharedResult<()> {
        if self.page_size == 0 {
            return Err(SharedError::InvalidConfig {
                field: "page_size".to_string(),
                value: self.page_size.to_string(),
            });
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(SharedError::InvalidConfig {
                field: "log_level".to_string(),
                value: self.log_level.clone(),
            });
        }
        Ok(())
    }
}
