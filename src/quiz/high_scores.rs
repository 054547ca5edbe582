//! High-score ledger and its backing stores
//!
//! The ledger keeps the top entries sorted by score (descending) then date
//! (ascending, so the earlier run wins a tie). Store failures never reach
//! the quiz: a failed load yields an empty ledger, a failed save is logged
//! and forgotten.

use serde::{Deserialize, Serialize};

use crate::errors::StorageError;
use crate::quiz::defaults::{DEFAULT_INITIALS, HIGH_SCORE_LIMIT, HIGH_SCORE_STORAGE_KEY, INITIALS_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    /// ISO-8601 timestamp; sorts chronologically as text
    pub date: String,
}

/// Key/value persistence for the ledger
pub trait ScoreStore {
    fn load(&self) -> Result<Vec<ScoreEntry>, StorageError>;
    fn save(&mut self, entries: &[ScoreEntry]) -> Result<(), StorageError>;
}

pub fn encode_entries(entries: &[ScoreEntry]) -> Result<String, StorageError> {
    serde_json::to_string(entries).map_err(|e| StorageError::Corrupt(e.to_string()))
}

pub fn decode_entries(raw: &str) -> Result<Vec<ScoreEntry>, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::Corrupt(e.to_string()))
}

/// In-memory store holding the same JSON text the browser store would
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    raw: Option<String>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Some(raw.into()) }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<Vec<ScoreEntry>, StorageError> {
        match &self.raw {
            Some(raw) => decode_entries(raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, entries: &[ScoreEntry]) -> Result<(), StorageError> {
        self.raw = Some(encode_entries(entries)?);
        Ok(())
    }
}

/// Browser `localStorage` store
#[derive(Debug, Clone)]
pub struct LocalStorageScoreStore {
    key: String,
}

impl Default for LocalStorageScoreStore {
    fn default() -> Self {
        Self::new(HIGH_SCORE_STORAGE_KEY)
    }
}

impl LocalStorageScoreStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl ScoreStore for LocalStorageScoreStore {
    fn load(&self) -> Result<Vec<ScoreEntry>, StorageError> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?;

        match raw {
            Some(raw) => decode_entries(&raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, entries: &[ScoreEntry]) -> Result<(), StorageError> {
        let raw = encode_entries(entries)?;
        self.storage()?
            .set_item(&self.key, &raw)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

/// Trim, upper-case and cut initials to three characters
pub fn normalize_initials(initials: &str) -> String {
    let cleaned: String = initials
        .trim()
        .chars()
        .take(INITIALS_LEN)
        .flat_map(char::to_uppercase)
        .collect();

    if cleaned.is_empty() {
        DEFAULT_INITIALS.to_string()
    } else {
        cleaned
    }
}

/// Sorted, capped high-score list backed by a store
#[derive(Debug)]
pub struct HighScoreLedger<S: ScoreStore> {
    store: S,
    entries: Vec<ScoreEntry>,
}

impl<S: ScoreStore> HighScoreLedger<S> {
    /// Load from `store`; unreadable data gives an empty ledger
    pub fn load(store: S) -> Self {
        let mut entries = match store.load() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("high scores unavailable, starting empty: {}", e);
                Vec::new()
            }
        };
        sort_and_truncate(&mut entries);

        Self { store, entries }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Insert an entry and persist; returns its rank if it made the list
    pub fn add(&mut self, entry: ScoreEntry) -> Option<usize> {
        self.entries.push(entry.clone());
        sort_and_truncate(&mut self.entries);

        if let Err(e) = self.store.save(&self.entries) {
            log::warn!("high scores not saved: {}", e);
        }

        self.entries.iter().position(|e| *e == entry)
    }

    /// Whether `score` would make the list right now
    pub fn qualifies(&self, score: u32) -> bool {
        score > 0
            && (self.entries.len() < HIGH_SCORE_LIMIT
                || self.entries.last().map_or(true, |last| score > last.score))
    }
}

fn sort_and_truncate(entries: &mut Vec<ScoreEntry>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.date.cmp(&b.date)));
    entries.truncate(HIGH_SCORE_LIMIT);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u32, date: &str) -> ScoreEntry {
        ScoreEntry {
            name: name.to_string(),
            score,
            date: date.to_string(),
        }
    }

    #[test]
    fn test_normalize_initials() {
        assert_eq!(normalize_initials("abc"), "ABC");
        assert_eq!(normalize_initials("  jd  "), "JD");
        assert_eq!(normalize_initials("abcdef"), "ABC");
        assert_eq!(normalize_initials(""), "---");
        assert_eq!(normalize_initials("   "), "---");
    }

    #[test]
    fn test_sorted_by_score_then_date() {
        let mut ledger = HighScoreLedger::load(MemoryScoreStore::new());
        ledger.add(entry("BBB", 7, "2024-02-01T00:00:00Z"));
        ledger.add(entry("AAA", 9, "2024-03-01T00:00:00Z"));
        ledger.add(entry("CCC", 7, "2024-01-01T00:00:00Z"));

        let names: Vec<&str> = ledger.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["AAA", "CCC", "BBB"]);
    }

    #[test]
    fn test_capped_at_limit() {
        let mut ledger = HighScoreLedger::load(MemoryScoreStore::new());
        for i in 0..12u32 {
            ledger.add(entry("XYZ", i + 1, &format!("2024-01-{:02}", i + 1)));
        }
        assert_eq!(ledger.entries().len(), HIGH_SCORE_LIMIT);
        assert_eq!(ledger.entries()[0].score, 12);
        assert_eq!(ledger.entries().last().unwrap().score, 3);
        assert!(!ledger.qualifies(2));
        assert!(ledger.qualifies(4));

        let rank = ledger.add(entry("LOW", 1, "2024-02-01"));
        assert_eq!(rank, None);
    }

    #[test]
    fn test_persisted_and_reloaded() {
        let mut ledger = HighScoreLedger::load(MemoryScoreStore::new());
        assert_eq!(ledger.add(entry("ABC", 5, "2024-01-01")), Some(0));

        let raw = ledger.store().raw().unwrap().to_string();
        let reloaded = HighScoreLedger::load(MemoryScoreStore::with_raw(raw));
        assert_eq!(reloaded.entries(), ledger.entries());
    }

    #[test]
    fn test_corrupt_store_degrades_to_empty() {
        let ledger = HighScoreLedger::load(MemoryScoreStore::with_raw("{not json"));
        assert!(ledger.entries().is_empty());
    }

    struct FailingStore;

    impl ScoreStore for FailingStore {
        fn load(&self) -> Result<Vec<ScoreEntry>, StorageError> {
            Err(StorageError::Unavailable("offline".to_string()))
        }

        fn save(&mut self, _entries: &[ScoreEntry]) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn test_failing_store_does_not_break_ledger() {
        let mut ledger = HighScoreLedger::load(FailingStore);
        assert_eq!(ledger.add(entry("ABC", 3, "2024-01-01")), Some(0));
        assert_eq!(ledger.entries().len(), 1);
    }
}
