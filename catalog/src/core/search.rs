//! Search-box helpers: suggestions and recent searches

use serde::{Deserialize, Serialize};

/// Maximum number of remembered searches
pub const HISTORY_LIMIT: usize = 5;

/// Candidates containing `query` case-insensitively, in candidate order
pub fn suggest<'a, S: AsRef<str>>(candidates: &'a [S], query: &str, limit: usize) -> Vec<&'a str> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

/// Recent searches, most recent first, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `query`, moving it to the front if already present
    pub fn record(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }
        self.entries.retain(|entry| entry != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for SearchHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut entries: Vec<String> = Vec::new();
        for entry in iter.into_iter().map(Into::into) {
            if !entry.is_empty() && !entries.contains(&entry) {
                entries.push(entry);
            }
        }
        entries.truncate(HISTORY_LIMIT);
        Self { entries }
    }
}
