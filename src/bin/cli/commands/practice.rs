use anyhow::{bail, Result};
use chrono::Utc;

use glossa_lib::srs::{select_next_word, Pick};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let now = Utc::now();
    let items = app.progress.list_items()?;

    let entry = match select_next_word(&app.catalog, &items, app.level, now, Pick::Random) {
        Some(entry) => entry,
        None => bail!("Catalog is empty"),
    };

    let is_review = items.iter().any(|item| item.word == entry.text && item.is_due(now));

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "entry": entry,
                    "isReview": is_review,
                }))?
            );
        }
        OutputFormat::Plain => {
            let kind = if is_review { "review" } else { "new word" };
            println!("{} [{}] ({})", entry.text, entry.pronunciation, kind);
            println!("  {}", entry.meaning);
            if let Some(example) = &entry.example {
                println!("  \"{}\"", example);
            }
            println!();
            println!("Grade with: glossa-cli review {} <remembered|forgotten>", entry.text);
        }
    }

    Ok(())
}
