use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let stats = app.progress.review_stats(Utc::now())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Plain => {
            println!("Saved words:    {}", stats.total_words);
            println!("  new:          {}", stats.new_words);
            println!("  learning:     {}", stats.learning_words);
            println!("  mature:       {}", stats.mature_words);
            println!("  favorites:    {}", stats.favorite_words);
            println!("Due for review: {}", stats.due_words);
            println!(
                "Today:          {} reviews, {} correct",
                stats.reviews_today, stats.correct_today
            );
            println!("Streak:         {} days (longest {})", stats.current_streak, stats.longest_streak);
        }
    }

    Ok(())
}
