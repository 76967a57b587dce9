//! Recent searches kept next to the stored profile

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use catalog::SearchHistory;

pub const HISTORY_FILE: &str = "search_history.json";

pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: storage_dir.into().join(HISTORY_FILE),
        }
    }

    pub fn load(&self) -> anyhow::Result<SearchHistory> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("Malformed search history in {}", self.path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(SearchHistory::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Add `query` to the front of the stored history
    pub fn record(&self, query: &str) -> anyhow::Result<SearchHistory> {
        let mut history = self.load()?;
        history.record(query);
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&history)?)?;
        Ok(history)
    }
}
