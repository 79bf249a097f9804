//! Data models for the word catalog

use serde::{Deserialize, Serialize};

/// A single vocabulary entry as shipped in the catalog file.
///
/// Entries are immutable at runtime; `text` is the unique key that
/// learning items refer back to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    /// Target-language word or phrase, unique within the catalog
    pub text: String,
    /// Phonetic transcription
    #[serde(default)]
    pub pronunciation: String,
    /// Primary gloss
    pub meaning: String,
    /// Example sentence, if the catalog provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Ordinal proficiency tier (the shipped catalog uses 3-6)
    pub level: u8,
}

impl VocabularyEntry {
    pub fn new(text: impl Into<String>, meaning: impl Into<String>, level: u8) -> Self {
        Self {
            text: text.into(),
            pronunciation: String::new(),
            meaning: meaning.into(),
            example: None,
            level,
        }
    }
}
