use anyhow::{Context, Result};

use crate::app::App;

pub fn run(app: &App, word: &str, favorite: bool) -> Result<()> {
    let item = app
        .progress
        .set_favorite(word, favorite)
        .with_context(|| format!("Failed to update '{}'", word))?;

    if item.is_favorite {
        println!("'{}' marked as favorite", item.word);
    } else {
        println!("'{}' is no longer a favorite", item.word);
    }
    Ok(())
}
