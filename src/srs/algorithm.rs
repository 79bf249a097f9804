//! Fixed-interval spaced repetition algorithm
//!
//! Each item carries a stage index into a fixed interval table. A
//! remembered review advances the stage by one (capped at the last
//! entry); a forgotten review resets it to the first entry. The next
//! review date is always `now + INTERVALS[stage]` days, computed at
//! grading time.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use super::models::{LearningItem, ReviewOutcome};

/// Review intervals in days, indexed by stage
pub const INTERVALS: [i64; 7] = [1, 3, 7, 14, 30, 60, 120];

/// UTC midnight of the given timestamp's calendar day
pub fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Apply a review outcome to an item.
///
/// Total over all valid items: stage advancement saturates at the table
/// end, failure resets to stage 0 from anywhere. The caller persists the
/// mutated item; this function performs no I/O.
pub fn grade(item: &mut LearningItem, outcome: ReviewOutcome, now: DateTime<Utc>) {
    item.review_count += 1;
    item.last_reviewed_at = Some(now);

    match outcome {
        ReviewOutcome::Remembered => {
            item.srs_stage = (item.srs_stage + 1).min(INTERVALS.len() - 1);
            item.correct_count += 1;
        }
        ReviewOutcome::Forgotten => {
            item.srs_stage = 0;
            item.incorrect_count += 1;
        }
    }

    item.next_review_at = now + Duration::days(INTERVALS[item.srs_stage]);
}

/// Items due at `now`, earliest first.
///
/// An item is due when its next review date is at or before the start of
/// the current day; ties break on save order so the result is stable.
pub fn due_items<'a>(items: &'a [LearningItem], now: DateTime<Utc>) -> Vec<&'a LearningItem> {
    let cutoff = start_of_day(now);

    let mut due: Vec<&LearningItem> = items
        .iter()
        .filter(|item| item.next_review_at <= cutoff)
        .collect();

    due.sort_by(|a, b| {
        a.next_review_at
            .cmp(&b.next_review_at)
            .then(a.saved_at.cmp(&b.saved_at))
    });

    due
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: i64) -> String {
    if days == 0 {
        "now".to_string()
    } else if days == 1 {
        "1d".to_string()
    } else if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        let weeks = days / 7;
        if weeks == 1 {
            "1w".to_string()
        } else {
            format!("{}w", weeks)
        }
    } else if days < 365 {
        let months = days / 30;
        if months == 1 {
            "1mo".to_string()
        } else {
            format!("{}mo", months)
        }
    } else {
        let years = days / 365;
        if years == 1 {
            "1y".to_string()
        } else {
            format!("{}y", years)
        }
    }
}
