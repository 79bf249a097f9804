//! glossa — vocabulary flashcard trainer with spaced repetition
//!
//! The scheduling core lives in [`srs`] and is pure: it owns the review
//! interval table and computes next-review dates and due sets over state
//! its callers supply. [`catalog`] provides the static word list,
//! [`progress`] persists the learner's saved words and review log, and
//! [`widget`] hands the current word to an out-of-process renderer.

pub mod catalog;
pub mod progress;
pub mod srs;
pub mod widget;

pub use catalog::{Catalog, VocabularyEntry};
pub use progress::{ProgressStorage, ReviewStats};
pub use srs::{LearningItem, Pick, ReviewOutcome};
