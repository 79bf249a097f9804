//! Statistics over saved words and the review log
//!
//! Streaks are computed from the review log's distinct calendar days, so
//! a longest streak reflects actual history rather than an estimate.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::srs::{due_items, LearningItem, ReviewOutcome, ReviewRecord, INTERVALS};

/// Stage at or above which a word counts as mature
const MATURE_STAGE: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_words: usize,
    pub due_words: usize,
    pub favorite_words: usize,
    /// Saved but never reviewed
    pub new_words: usize,
    /// Reviewed, still in the short-interval stages
    pub learning_words: usize,
    /// Reviewed and at a long-interval stage
    pub mature_words: usize,
    pub reviews_today: usize,
    pub correct_today: usize,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Compute statistics from the saved items and the review log
pub fn compute_stats(
    items: &[LearningItem],
    reviews: &[ReviewRecord],
    now: DateTime<Utc>,
) -> ReviewStats {
    let mut stats = ReviewStats::default();
    stats.total_words = items.len();
    stats.due_words = due_items(items, now).len();

    for item in items {
        if item.is_favorite {
            stats.favorite_words += 1;
        }
        if item.review_count == 0 {
            stats.new_words += 1;
        } else if item.srs_stage < MATURE_STAGE {
            stats.learning_words += 1;
        } else {
            debug_assert!(item.srs_stage < INTERVALS.len());
            stats.mature_words += 1;
        }
    }

    let today = now.date_naive();
    for record in reviews {
        if record.reviewed_at.date_naive() == today {
            stats.reviews_today += 1;
            if record.outcome == ReviewOutcome::Remembered {
                stats.correct_today += 1;
            }
        }
    }

    let review_days = distinct_review_days(reviews);
    stats.current_streak = current_streak(&review_days, today);
    stats.longest_streak = longest_streak(&review_days);

    stats
}

/// Sorted, de-duplicated calendar days on which at least one review happened
fn distinct_review_days(reviews: &[ReviewRecord]) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = reviews.iter().map(|r| r.reviewed_at.date_naive()).collect();
    days.sort();
    days.dedup();
    days
}

/// Consecutive review days ending today or yesterday.
///
/// Today not being over yet is not a broken streak: if there is no review
/// today, counting starts from yesterday.
fn current_streak(days: &[NaiveDate], today: NaiveDate) -> u32 {
    if days.is_empty() {
        return 0;
    }

    let mut check_date = today;
    if !days.contains(&check_date) {
        check_date = check_date - Duration::days(1);
        if !days.contains(&check_date) {
            return 0;
        }
    }

    let mut streak = 0;
    while days.contains(&check_date) {
        streak += 1;
        check_date = check_date - Duration::days(1);
    }
    streak
}

/// Longest run of consecutive review days in the whole log
fn longest_streak(days: &[NaiveDate]) -> u32 {
    if days.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut current = 1;
    for pair in days.windows(2) {
        if pair[1] - pair[0] == Duration::days(1) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn record_on(day: DateTime<Utc>, outcome: ReviewOutcome) -> ReviewRecord {
        ReviewRecord::new("logos", outcome, 0, 1, day)
    }

    #[test]
    fn test_bucket_counts() {
        let now = at(2026, 3, 10, 12);

        let fresh = LearningItem::new("alpha", now);
        let mut learning = LearningItem::new("beta", now);
        learning.review_count = 2;
        learning.srs_stage = 1;
        let mut mature = LearningItem::new("gamma", now);
        mature.review_count = 8;
        mature.srs_stage = 5;
        mature.is_favorite = true;

        let stats = compute_stats(&[fresh, learning, mature], &[], now);
        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.new_words, 1);
        assert_eq!(stats.learning_words, 1);
        assert_eq!(stats.mature_words, 1);
        assert_eq!(stats.favorite_words, 1);
    }

    #[test]
    fn test_reviews_today() {
        let now = at(2026, 3, 10, 18);
        let reviews = vec![
            record_on(at(2026, 3, 10, 9), ReviewOutcome::Remembered),
            record_on(at(2026, 3, 10, 10), ReviewOutcome::Forgotten),
            record_on(at(2026, 3, 9, 9), ReviewOutcome::Remembered),
        ];

        let stats = compute_stats(&[], &reviews, now);
        assert_eq!(stats.reviews_today, 2);
        assert_eq!(stats.correct_today, 1);
    }

    #[test]
    fn test_current_streak_with_today_reviewed() {
        let now = at(2026, 3, 10, 18);
        let reviews = vec![
            record_on(at(2026, 3, 8, 9), ReviewOutcome::Remembered),
            record_on(at(2026, 3, 9, 9), ReviewOutcome::Remembered),
            record_on(at(2026, 3, 10, 9), ReviewOutcome::Remembered),
        ];

        let stats = compute_stats(&[], &reviews, now);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn test_current_streak_allows_unfinished_today() {
        let now = at(2026, 3, 10, 8);
        let reviews = vec![
            record_on(at(2026, 3, 8, 9), ReviewOutcome::Remembered),
            record_on(at(2026, 3, 9, 9), ReviewOutcome::Remembered),
        ];

        let stats = compute_stats(&[], &reviews, now);
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn test_current_streak_broken_by_gap() {
        let now = at(2026, 3, 10, 8);
        let reviews = vec![record_on(at(2026, 3, 7, 9), ReviewOutcome::Remembered)];

        let stats = compute_stats(&[], &reviews, now);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn test_longest_streak_scans_history() {
        let now = at(2026, 6, 1, 12);
        // A five-day run in February, then a two-day run in March.
        let mut reviews = Vec::new();
        for d in 10..15 {
            reviews.push(record_on(at(2026, 2, d, 9), ReviewOutcome::Remembered));
        }
        reviews.push(record_on(at(2026, 3, 20, 9), ReviewOutcome::Forgotten));
        reviews.push(record_on(at(2026, 3, 21, 9), ReviewOutcome::Remembered));

        let stats = compute_stats(&[], &reviews, now);
        assert_eq!(stats.longest_streak, 5);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn test_multiple_reviews_same_day_count_once_for_streaks() {
        let now = at(2026, 3, 10, 18);
        let reviews = vec![
            record_on(at(2026, 3, 10, 9), ReviewOutcome::Remembered),
            record_on(at(2026, 3, 10, 10), ReviewOutcome::Remembered),
            record_on(at(2026, 3, 10, 11), ReviewOutcome::Remembered),
        ];

        let stats = compute_stats(&[], &reviews, now);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 1);
    }
}
