//! Next-word selection
//!
//! Due reviews take strict priority over new material: a learner is never
//! shown a new word while reviews are overdue. When nothing is due, a new
//! word comes from the catalog filtered to the learner's level, falling
//! back to the whole catalog when that level has no entries.

use chrono::{DateTime, Datelike, Utc};
use log::debug;
use rand::seq::SliceRandom;

use crate::catalog::{Catalog, VocabularyEntry};

use super::algorithm::due_items;
use super::models::LearningItem;

/// How a new word is chosen when no reviews are due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Stable for a whole calendar day (day-of-year modulo pool size);
    /// used for widget-style content that must not change between calls
    Daily,
    /// Uniform sample, for session-based practice
    Random,
}

/// Select the next word to show the learner.
///
/// Returns the earliest-due saved word if any review is due, otherwise a
/// new word from the catalog. Unseen words are preferred over already
/// saved ones within the candidate pool. Returns `None` only when the
/// catalog is empty.
pub fn select_next_word<'a>(
    catalog: &'a Catalog,
    items: &[LearningItem],
    level: Option<u8>,
    now: DateTime<Utc>,
    pick: Pick,
) -> Option<&'a VocabularyEntry> {
    // Reviews first. Items whose word has left the catalog are skipped.
    for due in due_items(items, now) {
        match catalog.get(&due.word) {
            Some(entry) => {
                debug!("Next word '{}' is a due review", entry.text);
                return Some(entry);
            }
            None => debug!("Due word '{}' is no longer in the catalog", due.word),
        }
    }

    // No reviews due: introduce new material.
    let mut pool: Vec<&VocabularyEntry> = match level {
        Some(level) => {
            let at_level = catalog.entries_at_level(level);
            if at_level.is_empty() {
                debug!("No catalog entries at level {}, falling back to full catalog", level);
                catalog.all_entries().iter().collect()
            } else {
                at_level
            }
        }
        None => catalog.all_entries().iter().collect(),
    };

    let unseen: Vec<&VocabularyEntry> = pool
        .iter()
        .filter(|e| !items.iter().any(|i| i.word == e.text))
        .copied()
        .collect();
    if !unseen.is_empty() {
        pool = unseen;
    }

    if pool.is_empty() {
        return None;
    }

    match pick {
        Pick::Daily => {
            let index = now.date_naive().ordinal0() as usize % pool.len();
            Some(pool[index])
        }
        Pick::Random => pool.choose(&mut rand::thread_rng()).copied(),
    }
}
