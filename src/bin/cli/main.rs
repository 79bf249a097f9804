mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use glossa_lib::ReviewOutcome;

#[derive(Parser)]
#[command(name = "glossa-cli", about = "Vocabulary flashcard trainer with spaced repetition", version)]
struct Cli {
    /// Data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Catalog file (default: <data-dir>/catalog.json)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Proficiency level to draw new words from
    #[arg(long, global = true)]
    level: Option<u8>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutcomeArg {
    Remembered,
    Forgotten,
}

impl From<OutcomeArg> for ReviewOutcome {
    fn from(arg: OutcomeArg) -> Self {
        match arg {
            OutcomeArg::Remembered => ReviewOutcome::Remembered,
            OutcomeArg::Forgotten => ReviewOutcome::Forgotten,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Save a catalog word for learning
    Save {
        /// Word text (case-insensitive prefix match)
        word: String,
    },

    /// Remove a saved word and its review state
    Remove {
        /// Word text
        word: String,
    },

    /// Mark a saved word as a favorite
    Favorite {
        /// Word text
        word: String,
        /// Clear the favorite flag instead
        #[arg(long)]
        off: bool,
    },

    /// List saved words
    List {
        /// Only words due for review
        #[arg(long)]
        due: bool,
        /// Only favorites
        #[arg(long)]
        favorites: bool,
    },

    /// Show the review queue (due words, earliest first)
    Due,

    /// Grade a saved word
    Review {
        /// Word text
        word: String,
        /// Whether the word was remembered or forgotten
        outcome: OutcomeArg,
    },

    /// Show today's word and refresh the widget snapshot
    Today,

    /// Pick a word for a practice session (random when nothing is due)
    Practice,

    /// Show learning statistics
    Stats,

    /// List catalog entries
    Catalog {
        /// Only entries at this level
        #[arg(long)]
        at_level: Option<u8>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.data_dir, cli.catalog, cli.level)?;

    match cli.command {
        Command::Save { word } => commands::save::run(&app, &word, &cli.format)?,
        Command::Remove { word } => commands::remove::run(&app, &word)?,
        Command::Favorite { word, off } => commands::favorite::run(&app, &word, !off)?,
        Command::List { due, favorites } => commands::list::run(&app, due, favorites, &cli.format)?,
        Command::Due => commands::list::run(&app, true, false, &cli.format)?,
        Command::Review { word, outcome } => {
            commands::review::run(&app, &word, outcome.into(), &cli.format)?
        }
        Command::Today => commands::today::run(&app, &cli.format)?,
        Command::Practice => commands::practice::run(&app, &cli.format)?,
        Command::Stats => commands::stats::run(&app, &cli.format)?,
        Command::Catalog { at_level } => commands::catalog::run(&app, at_level, &cli.format)?,
    }

    Ok(())
}
