use anyhow::{Context, Result};

use crate::app::App;

pub fn run(app: &App, word: &str) -> Result<()> {
    app.progress
        .delete_word(word)
        .with_context(|| format!("Failed to remove '{}'", word))?;
    println!("Removed '{}'", word);
    Ok(())
}
