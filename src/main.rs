//! Wordle Game - CLI
//!
//! Terminal Wordle with a TUI board and a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::run_simple,
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden 5-letter word in 6 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of 5-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based CLI mode (no TUI)
    Simple,
}

/// Load the dictionary based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "embedded" => Ok(WordList::embedded()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list from {path}"))?;
            WordList::new(words)
                .with_context(|| format!("Word list {path} has no valid 5-letter words"))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // An empty dictionary is a fatal configuration error, surfaced before
    // any session starts
    let words = load_wordlist(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words),
        Commands::Simple => run_simple(&words).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_play_command(words: &WordList) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words);
    run_tui(app)
}
