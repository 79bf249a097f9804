//! Storage operations for learner progress
//!
//! Directory structure:
//! ```text
//! <data_dir>/progress/
//! ├── items.json       # Array of all learning items
//! └── reviews.json     # Append-only review log
//! ```
//!
//! Items are created only by explicit save and removed only by explicit
//! delete; grading goes through [`ProgressStorage::submit_review`], which
//! applies the scheduling algorithm and persists the result.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::info;
use thiserror::Error;

use crate::catalog::VocabularyEntry;
use crate::srs::{self, LearningItem, ReviewOutcome, ReviewRecord};

use super::stats::{compute_stats, ReviewStats};

#[derive(Error, Debug)]
pub enum ProgressError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Word not saved: {0}")]
    WordNotFound(String),
}

pub type Result<T> = std::result::Result<T, ProgressError>;

/// Default data directory (e.g. ~/.local/share/glossa)
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("glossa"))
}

/// Storage manager for the learner's saved words and review log
pub struct ProgressStorage {
    progress_dir: PathBuf,
}

impl ProgressStorage {
    /// Create a progress store rooted at the given data directory
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let progress_dir = data_dir.join("progress");
        fs::create_dir_all(&progress_dir)?;
        Ok(Self { progress_dir })
    }

    fn items_path(&self) -> PathBuf {
        self.progress_dir.join("items.json")
    }

    fn reviews_path(&self) -> PathBuf {
        self.progress_dir.join("reviews.json")
    }

    // ==================== Item Operations ====================

    /// All saved items, oldest save first
    pub fn list_items(&self) -> Result<Vec<LearningItem>> {
        let path = self.items_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let mut items: Vec<LearningItem> = serde_json::from_str(&content)?;
        items.sort_by(|a, b| a.saved_at.cmp(&b.saved_at));
        Ok(items)
    }

    fn write_items(&self, items: &[LearningItem]) -> Result<()> {
        fs::write(self.items_path(), serde_json::to_string_pretty(items)?)?;
        Ok(())
    }

    /// Get the item for a saved word
    pub fn get_item(&self, word: &str) -> Result<LearningItem> {
        self.list_items()?
            .into_iter()
            .find(|item| item.word == word)
            .ok_or_else(|| ProgressError::WordNotFound(word.to_string()))
    }

    /// Save a catalog word for learning.
    ///
    /// Idempotent: saving an already saved word returns the existing item
    /// untouched.
    pub fn save_word(&self, entry: &VocabularyEntry, now: DateTime<Utc>) -> Result<LearningItem> {
        let mut items = self.list_items()?;
        if let Some(existing) = items.iter().find(|item| item.word == entry.text) {
            return Ok(existing.clone());
        }

        let item = LearningItem::new(entry.text.clone(), now);
        items.push(item.clone());
        self.write_items(&items)?;

        info!("Saved word '{}' for learning", entry.text);
        Ok(item)
    }

    /// Remove a saved word and its review state
    pub fn delete_word(&self, word: &str) -> Result<()> {
        let mut items = self.list_items()?;
        let before = items.len();
        items.retain(|item| item.word != word);
        if items.len() == before {
            return Err(ProgressError::WordNotFound(word.to_string()));
        }

        self.write_items(&items)?;
        info!("Removed word '{}'", word);
        Ok(())
    }

    /// Toggle the favorite flag; independent of scheduling
    pub fn set_favorite(&self, word: &str, favorite: bool) -> Result<LearningItem> {
        let mut items = self.list_items()?;
        let item = items
            .iter_mut()
            .find(|item| item.word == word)
            .ok_or_else(|| ProgressError::WordNotFound(word.to_string()))?;

        item.is_favorite = favorite;
        let updated = item.clone();
        self.write_items(&items)?;
        Ok(updated)
    }

    // ==================== Review Operations ====================

    /// Grade a saved word and persist the outcome.
    ///
    /// Applies the scheduling algorithm to the stored item, writes it
    /// back, and appends a record to the review log.
    pub fn submit_review(
        &self,
        word: &str,
        outcome: ReviewOutcome,
        now: DateTime<Utc>,
    ) -> Result<LearningItem> {
        let mut items = self.list_items()?;
        let item = items
            .iter_mut()
            .find(|item| item.word == word)
            .ok_or_else(|| ProgressError::WordNotFound(word.to_string()))?;

        let stage_before = item.srs_stage;
        srs::grade(item, outcome, now);
        let record = ReviewRecord::new(word, outcome, stage_before, item.srs_stage, now);
        let updated = item.clone();

        self.write_items(&items)?;
        self.append_review(record)?;

        Ok(updated)
    }

    /// Items due at `now`, earliest first
    pub fn due_items(&self, now: DateTime<Utc>) -> Result<Vec<LearningItem>> {
        let items = self.list_items()?;
        Ok(srs::due_items(&items, now).into_iter().cloned().collect())
    }

    /// Full review log, oldest first
    pub fn list_reviews(&self) -> Result<Vec<ReviewRecord>> {
        let path = self.reviews_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let records: Vec<ReviewRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn append_review(&self, record: ReviewRecord) -> Result<()> {
        let mut records = self.list_reviews()?;
        records.push(record);
        fs::write(self.reviews_path(), serde_json::to_string_pretty(&records)?)?;
        Ok(())
    }

    /// Statistics over the saved items and review log
    pub fn review_stats(&self, now: DateTime<Utc>) -> Result<ReviewStats> {
        let items = self.list_items()?;
        let reviews = self.list_reviews()?;
        Ok(compute_stats(&items, &reviews, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn store(dir: &TempDir) -> ProgressStorage {
        ProgressStorage::new(dir.path().to_path_buf()).unwrap()
    }

    fn entry(text: &str) -> VocabularyEntry {
        VocabularyEntry::new(text, "gloss", 5)
    }

    #[test]
    fn test_save_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let storage = store(&dir);
        let t0 = at(2026, 3, 1, 10);

        let first = storage.save_word(&entry("logos"), t0).unwrap();
        let second = storage.save_word(&entry("logos"), t0 + Duration::days(2)).unwrap();

        assert_eq!(storage.list_items().unwrap().len(), 1);
        assert_eq!(first.saved_at, second.saved_at);
    }

    #[test]
    fn test_submit_review_persists_schedule() {
        let dir = TempDir::new().unwrap();
        let storage = store(&dir);
        let t0 = at(2026, 3, 1, 10);

        storage.save_word(&entry("logos"), t0).unwrap();
        let graded = storage
            .submit_review("logos", ReviewOutcome::Remembered, t0)
            .unwrap();

        assert_eq!(graded.srs_stage, 1);
        assert_eq!(graded.next_review_at, t0 + Duration::days(3));

        // Reload from disk and compare
        let reloaded = storage.get_item("logos").unwrap();
        assert_eq!(reloaded.srs_stage, 1);
        assert_eq!(reloaded.next_review_at, graded.next_review_at);

        let log = storage.list_reviews().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].word, "logos");
        assert_eq!(log[0].stage_before, 0);
        assert_eq!(log[0].stage_after, 1);
    }

    #[test]
    fn test_review_of_unsaved_word_fails() {
        let dir = TempDir::new().unwrap();
        let storage = store(&dir);

        let result = storage.submit_review("missing", ReviewOutcome::Remembered, at(2026, 3, 1, 10));
        assert!(matches!(result, Err(ProgressError::WordNotFound(_))));
    }

    #[test]
    fn test_delete_word() {
        let dir = TempDir::new().unwrap();
        let storage = store(&dir);
        let t0 = at(2026, 3, 1, 10);

        storage.save_word(&entry("logos"), t0).unwrap();
        storage.delete_word("logos").unwrap();

        assert!(storage.list_items().unwrap().is_empty());
        assert!(matches!(storage.delete_word("logos"), Err(ProgressError::WordNotFound(_))));
    }

    #[test]
    fn test_favorite_does_not_touch_schedule() {
        let dir = TempDir::new().unwrap();
        let storage = store(&dir);
        let t0 = at(2026, 3, 1, 10);

        storage.save_word(&entry("logos"), t0).unwrap();
        let faved = storage.set_favorite("logos", true).unwrap();

        assert!(faved.is_favorite);
        assert_eq!(faved.srs_stage, 0);
        assert_eq!(faved.review_count, 0);
        assert_eq!(faved.next_review_at, t0);
    }

    #[test]
    fn test_due_items_from_disk() {
        let dir = TempDir::new().unwrap();
        let storage = store(&dir);
        let t0 = at(2026, 3, 1, 10);

        storage.save_word(&entry("alpha"), t0).unwrap();
        storage.save_word(&entry("beta"), t0 + Duration::hours(1)).unwrap();
        storage
            .submit_review("beta", ReviewOutcome::Remembered, t0)
            .unwrap();

        // Nine days on: alpha (never reviewed, due since save) and beta
        // (graded to +3d) are both due, alpha first.
        let due = storage.due_items(at(2026, 3, 10, 12)).unwrap();
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].word, "alpha");
        assert_eq!(due[1].word, "beta");
    }
}
