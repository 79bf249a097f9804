use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, word: &str, format: &OutputFormat) -> Result<()> {
    let entry = app.find_entry(word)?;
    let item = app.progress.save_word(entry, Utc::now())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        OutputFormat::Plain => {
            println!("Saved '{}' — {}", entry.text, entry.meaning);
        }
    }

    Ok(())
}
