//! Spaced repetition scheduling
//!
//! This module provides:
//! - The learning-item data model (per-saved-word review state)
//! - The fixed-interval scheduling algorithm (grade, due query)
//! - Next-word selection (due reviews first, then new material)
//!
//! Everything here is pure and synchronous: no I/O, no clocks of its
//! own. Callers supply "now" and persist mutated items themselves.

pub mod algorithm;
pub mod models;
pub mod picker;

pub use algorithm::{due_items, format_interval, grade, start_of_day, INTERVALS};
pub use models::{LearningItem, ReviewOutcome, ReviewRecord};
pub use picker::{select_next_word, Pick};
