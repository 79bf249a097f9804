use anyhow::{bail, Result};
use chrono::Utc;

use glossa_lib::srs::{select_next_word, Pick};
use glossa_lib::widget::WordSnapshot;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let now = Utc::now();
    let items = app.progress.list_items()?;

    let entry = match select_next_word(&app.catalog, &items, app.level, now, Pick::Daily) {
        Some(entry) => entry,
        None => bail!("Catalog is empty"),
    };

    // Keep the out-of-process widget in sync with what we just showed.
    let snapshot = WordSnapshot::from_entry(entry, now.date_naive());
    app.snapshots.write(&snapshot)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        OutputFormat::Plain => {
            println!("{} [{}]", entry.text, entry.pronunciation);
            println!("  {}", entry.meaning);
            if let Some(example) = &entry.example {
                println!("  \"{}\"", example);
            }
        }
    }

    Ok(())
}
