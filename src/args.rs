use std::path::PathBuf;

use clap::Parser;

/// Scrolling typeform-style lessons with quizzes and a scripted reveal.
#[derive(Parser, Debug, Default)]
#[command(name = "typeslides", version)]
pub struct Cli {
    /// Built-in deck to present. Defaults to `default_deck` from the config.
    #[arg(long, value_name = "ID", conflicts_with = "deck_file")]
    pub deck: Option<String>,

    /// Load a deck from a .toml or .json file.
    #[arg(long = "deck-file", value_name = "FILE")]
    pub deck_file: Option<PathBuf>,

    /// List the built-in decks and exit.
    #[arg(long = "list-decks", default_value_t = false)]
    pub list_decks: bool,

    /// Print a built-in deck as TOML and exit.
    #[arg(long = "print-deck", value_name = "ID")]
    pub print_deck: Option<String>,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Hide the progress bar.
    #[arg(long = "no-progress", default_value_t = false)]
    pub no_progress: bool,
}
