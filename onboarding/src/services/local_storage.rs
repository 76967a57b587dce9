//! File-backed key-value storage for the finalised profile
//!
//! Each key is one pretty-printed JSON document `<key>.json` inside the
//! storage directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shared::{component_debug, Component};

use crate::core::CompletedProfile;
use crate::error::OnboardingResult;
use crate::traits::ProfileSink;

/// Storage key of the onboarded user
pub const USER_KEY: &str = "sparkoch_user";

#[derive(Debug, Clone)]
pub struct LocalStorageSink {
    storage_dir: PathBuf,
    key: String,
}

impl LocalStorageSink {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self::with_key(storage_dir, USER_KEY)
    }

    pub fn with_key(storage_dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            key: key.into(),
        }
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn path(&self) -> PathBuf {
        self.storage_dir.join(format!("{}.json", self.key))
    }

    /// Stored profile, or `None` when nothing was saved under the key
    pub fn load(&self) -> OnboardingResult<Option<CompletedProfile>> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn remove(&self) -> OnboardingResult<bool> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl ProfileSink for LocalStorageSink {
    fn save(&self, profile: &CompletedProfile) -> OnboardingResult<()> {
        fs::create_dir_all(&self.storage_dir)?;
        let path = self.path();
        let json = serde_json::to_string_pretty(profile)?;

        // Write then rename so a crash never leaves a truncated document
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;

        component_debug!(Component::Onboarding, path = %path.display(), "Profile stored");
        Ok(())
    }
}
