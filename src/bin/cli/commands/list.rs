use anyhow::Result;
use chrono::Utc;

use glossa_lib::srs::{format_interval, INTERVALS};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, due_only: bool, favorites_only: bool, format: &OutputFormat) -> Result<()> {
    let now = Utc::now();

    let items = if due_only {
        app.progress.due_items(now)?
    } else {
        app.progress.list_items()?
    };
    let items: Vec<_> = items
        .into_iter()
        .filter(|item| !favorites_only || item.is_favorite)
        .collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        OutputFormat::Plain => {
            if items.is_empty() {
                if due_only {
                    println!("Nothing due for review.");
                } else {
                    println!("No saved words.");
                }
                return Ok(());
            }

            for item in &items {
                let meaning = app
                    .catalog
                    .get(&item.word)
                    .map(|e| e.meaning.as_str())
                    .unwrap_or("(not in catalog)");

                let schedule = if item.is_due(now) {
                    "due".to_string()
                } else {
                    let days = (item.next_review_at.date_naive() - now.date_naive()).num_days();
                    format!("in {}", format_interval(days.max(0)))
                };

                let favorite = if item.is_favorite { " ★" } else { "" };
                println!(
                    "{} — {} [stage {}/{}, {}]{}",
                    item.word,
                    meaning,
                    item.srs_stage,
                    INTERVALS.len() - 1,
                    schedule,
                    favorite
                );
            }
        }
    }

    Ok(())
}
