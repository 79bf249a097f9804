//! Catalog loading and queries
//!
//! The catalog is a single JSON array of entries, loaded once at startup
//! and held in memory for the process lifetime.

use std::fs;
use std::path::Path;

use log::{info, warn};
use thiserror::Error;

use super::models::VocabularyEntry;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog file not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// In-memory word catalog
pub struct Catalog {
    entries: Vec<VocabularyEntry>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    ///
    /// Duplicate `text` keys are dropped (first occurrence wins) so that
    /// lookups by word text stay unambiguous.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let raw: Vec<VocabularyEntry> = serde_json::from_str(&content)?;

        let mut entries: Vec<VocabularyEntry> = Vec::with_capacity(raw.len());
        for entry in raw {
            if entries.iter().any(|e| e.text == entry.text) {
                warn!("Duplicate catalog entry '{}' skipped", entry.text);
                continue;
            }
            entries.push(entry);
        }

        info!("Loaded catalog with {} entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    /// Build a catalog directly from entries (used by tests and embedders)
    pub fn from_entries(entries: Vec<VocabularyEntry>) -> Self {
        Self { entries }
    }

    /// All entries, in catalog order
    pub fn all_entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Entries at a specific proficiency level, in catalog order
    pub fn entries_at_level(&self, level: u8) -> Vec<&VocabularyEntry> {
        self.entries.iter().filter(|e| e.level == level).collect()
    }

    /// Look up an entry by its word text
    pub fn get(&self, text: &str) -> Option<&VocabularyEntry> {
        self.entries.iter().find(|e| e.text == text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
