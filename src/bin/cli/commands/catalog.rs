use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, at_level: Option<u8>, format: &OutputFormat) -> Result<()> {
    let entries: Vec<_> = match at_level {
        Some(level) => app.catalog.entries_at_level(level),
        None => app.catalog.all_entries().iter().collect(),
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Plain => {
            if entries.is_empty() {
                println!("No catalog entries.");
                return Ok(());
            }
            for entry in entries {
                println!("L{} {} [{}] — {}", entry.level, entry.text, entry.pronunciation, entry.meaning);
            }
        }
    }

    Ok(())
}
