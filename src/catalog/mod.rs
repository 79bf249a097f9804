//! Word catalog
//!
//! The static, read-only set of vocabulary entries available for
//! introduction as new material. Entries are grouped by proficiency
//! level and keyed by their target-language text.

mod models;
mod storage;

pub use models::VocabularyEntry;
pub use storage::{Catalog, CatalogError};
