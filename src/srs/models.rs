//! Data models for spaced repetition state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Learner's answer to a review prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewOutcome {
    Remembered,
    Forgotten,
}

/// Mutable review state for one saved word.
///
/// One item exists per word the learner has explicitly saved; `word` is
/// the text key of the catalog entry it refers back to. Items are only
/// mutated by grading and favorite toggling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningItem {
    pub word: String,
    /// Index into the review interval table
    #[serde(default)]
    pub srs_stage: usize,
    /// Total number of grading events
    #[serde(default)]
    pub review_count: i32,
    /// Set on every grading event; None until the first review
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    /// When the word next comes up for review
    pub next_review_at: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
    /// Cumulative counters for difficulty reporting
    #[serde(default)]
    pub correct_count: i32,
    #[serde(default)]
    pub incorrect_count: i32,
    /// When the learner saved the word; ties in due ordering break on this
    pub saved_at: DateTime<Utc>,
}

impl LearningItem {
    pub fn new(word: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            word: word.into(),
            srs_stage: 0,
            review_count: 0,
            last_reviewed_at: None,
            next_review_at: now,
            is_favorite: false,
            correct_count: 0,
            incorrect_count: 0,
            saved_at: now,
        }
    }

    /// Check whether the item is due at the given time
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= super::algorithm::start_of_day(now)
    }
}

/// A record of a single grading event, appended to the review log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub id: Uuid,
    pub word: String,
    pub outcome: ReviewOutcome,
    /// Stage at the time of the review
    pub stage_before: usize,
    /// Stage after the review was applied
    pub stage_after: usize,
    /// When the review occurred
    pub reviewed_at: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn new(
        word: impl Into<String>,
        outcome: ReviewOutcome,
        stage_before: usize,
        stage_after: usize,
        reviewed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            word: word.into(),
            outcome,
            stage_before,
            stage_after,
            reviewed_at,
        }
    }
}
