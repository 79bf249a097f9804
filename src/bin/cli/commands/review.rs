use anyhow::{Context, Result};
use chrono::Utc;

use glossa_lib::srs::{format_interval, INTERVALS};
use glossa_lib::ReviewOutcome;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, word: &str, outcome: ReviewOutcome, format: &OutputFormat) -> Result<()> {
    let item = app
        .progress
        .submit_review(word, outcome, Utc::now())
        .with_context(|| format!("Failed to review '{}'", word))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        OutputFormat::Plain => {
            let verdict = match outcome {
                ReviewOutcome::Remembered => "remembered",
                ReviewOutcome::Forgotten => "forgotten",
            };
            println!(
                "'{}' {} — stage {}, next review in {}",
                item.word,
                verdict,
                item.srs_stage,
                format_interval(INTERVALS[item.srs_stage])
            );
        }
    }

    Ok(())
}
