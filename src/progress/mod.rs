//! Learner progress
//!
//! Durable storage for the learner's saved words and their review state,
//! plus statistics derived from the review log.

mod stats;
mod storage;

pub use stats::{compute_stats, ReviewStats};
pub use storage::{default_data_dir, ProgressError, ProgressStorage};
