//! Word-of-the-day snapshot storage
//!
//! File layout:
//! ```text
//! <data_dir>/widget/
//! └── word_of_day.json
//! ```

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::VocabularyEntry;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WidgetError>;

/// Everything a widget renderer needs to display the current word
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WordSnapshot {
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// The calendar day the word was picked for
    pub picked_on: NaiveDate,
}

impl WordSnapshot {
    pub fn from_entry(entry: &VocabularyEntry, picked_on: NaiveDate) -> Self {
        Self {
            word: entry.text.clone(),
            pronunciation: entry.pronunciation.clone(),
            meaning: entry.meaning.clone(),
            example: entry.example.clone(),
            picked_on,
        }
    }
}

/// Reads and writes the shared snapshot file
pub struct SnapshotStore {
    widget_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let widget_dir = data_dir.join("widget");
        fs::create_dir_all(&widget_dir)?;
        Ok(Self { widget_dir })
    }

    fn snapshot_path(&self) -> PathBuf {
        self.widget_dir.join("word_of_day.json")
    }

    /// Replace the snapshot with the given word
    pub fn write(&self, snapshot: &WordSnapshot) -> Result<()> {
        fs::write(self.snapshot_path(), serde_json::to_string_pretty(snapshot)?)?;
        info!("Widget snapshot updated to '{}'", snapshot.word);
        Ok(())
    }

    /// Current snapshot, or None if nothing has been written yet
    pub fn read(&self) -> Result<Option<WordSnapshot>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let snapshot: WordSnapshot = serde_json::from_str(&content)?;
        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_before_write_is_none() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().to_path_buf()).unwrap();
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().to_path_buf()).unwrap();

        let mut entry = VocabularyEntry::new("kairos", "the opportune moment", 5);
        entry.pronunciation = "KY-ross".to_string();
        entry.example = Some("Seize the kairos.".to_string());

        let picked_on = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let snapshot = WordSnapshot::from_entry(&entry, picked_on);
        store.write(&snapshot).unwrap();

        let read_back = store.read().unwrap().unwrap();
        assert_eq!(read_back, snapshot);
        assert_eq!(read_back.picked_on, picked_on);
    }

    #[test]
    fn test_write_replaces_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().to_path_buf()).unwrap();
        let picked_on = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

        let first = WordSnapshot::from_entry(&VocabularyEntry::new("logos", "word", 3), picked_on);
        let second = WordSnapshot::from_entry(&VocabularyEntry::new("techne", "craft", 5), picked_on);
        store.write(&first).unwrap();
        store.write(&second).unwrap();

        assert_eq!(store.read().unwrap().unwrap().word, "techne");
    }
}
