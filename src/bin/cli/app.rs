use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use glossa_lib::catalog::{Catalog, VocabularyEntry};
use glossa_lib::progress::{default_data_dir, ProgressStorage};
use glossa_lib::widget::SnapshotStore;

/// Shared application state for CLI commands
pub struct App {
    pub catalog: Catalog,
    pub progress: ProgressStorage,
    pub snapshots: SnapshotStore,
    /// Learner's configured proficiency level, if any
    pub level: Option<u8>,
}

impl App {
    /// Initialize from the given (or default) data directory
    pub fn new(
        data_dir: Option<PathBuf>,
        catalog_path: Option<PathBuf>,
        level: Option<u8>,
    ) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir().context("Failed to get data directory")?,
        };

        let catalog_path = catalog_path.unwrap_or_else(|| data_dir.join("catalog.json"));
        let catalog = Catalog::load(&catalog_path).with_context(|| {
            format!(
                "Failed to load catalog from {} (pass --catalog to use another file)",
                catalog_path.display()
            )
        })?;

        let progress = ProgressStorage::new(data_dir.clone())
            .context("Failed to initialize progress storage")?;
        let snapshots =
            SnapshotStore::new(data_dir).context("Failed to initialize widget snapshot storage")?;

        Ok(Self {
            catalog,
            progress,
            snapshots,
            level,
        })
    }

    /// Find a catalog entry by word text (case-insensitive prefix match)
    pub fn find_entry(&self, word: &str) -> Result<&VocabularyEntry> {
        let word_lower = word.to_lowercase();

        // Exact match first
        if let Some(entry) = self
            .catalog
            .all_entries()
            .iter()
            .find(|e| e.text.to_lowercase() == word_lower)
        {
            return Ok(entry);
        }

        // Prefix match
        let matches: Vec<&VocabularyEntry> = self
            .catalog
            .all_entries()
            .iter()
            .filter(|e| e.text.to_lowercase().starts_with(&word_lower))
            .collect();

        match matches.len() {
            0 => bail!("No catalog entry matching '{}'", word),
            1 => Ok(matches[0]),
            _ => bail!(
                "Ambiguous word '{}'. Matches:\n{}",
                word,
                matches
                    .iter()
                    .map(|e| format!("  - {}", e.text))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }
}
