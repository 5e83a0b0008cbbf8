use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};

use typeslides::args::Cli;
use typeslides::config::Config;
use typeslides::deck::{builtin, Deck, DeckError};
use typeslides::logging::init_tracing;
use typeslides::shutdown::ShutdownCoordinator;
use typeslides::ui::runtime;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.list_decks {
        for deck in builtin::all() {
            println!("{:<12} {}", deck.id, deck.title);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(id) = &cli.print_deck {
        let deck = match Deck::builtin(id) {
            Ok(deck) => deck,
            Err(err) => return Ok(report_deck_error(&err)),
        };
        let toml = toml::to_string_pretty(&deck).context("failed to serialize deck")?;
        print!("{toml}");
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;
    if cli.no_progress {
        config.ui.show_progress = false;
    }

    let deck = match resolve_deck(&cli, &config) {
        Ok(deck) => deck,
        Err(err @ DeckError::UnknownDeck { .. }) => return Ok(report_deck_error(&err)),
        Err(err) => return Err(err).context("failed to load deck"),
    };

    init_tracing(&config.logging);
    info!(deck = %deck.id, version = env!("CARGO_PKG_VERSION"), "starting presentation");

    let coordinator = ShutdownCoordinator::new();
    let signal_handle = coordinator.handle();
    tokio::spawn(async move {
        tokio::select! {
            _ = wait_for_signal() => signal_handle.signal(),
            // The UI signals on its own exit; stop listening then.
            _ = signal_handle.wait() => debug!("signal listener stopped"),
        }
    });

    let ui_shutdown = coordinator.handle();
    let result = tokio::task::spawn_blocking(move || runtime::run(deck, config, ui_shutdown))
        .await
        .context("UI task panicked")?;
    if let Err(err) = &result {
        error!(error = %err, "presentation failed");
    }
    result.context("terminal error")?;
    Ok(ExitCode::SUCCESS)
}

fn resolve_deck(cli: &Cli, config: &Config) -> Result<Deck, DeckError> {
    match (&cli.deck_file, &cli.deck) {
        (Some(path), _) => Deck::load_from(path),
        (None, Some(id)) => Deck::builtin(id),
        (None, None) => Deck::builtin(&config.default_deck),
    }
}

fn report_deck_error(err: &DeckError) -> ExitCode {
    eprintln!("Error: {err}");
    eprintln!("Available decks: {}", builtin::BUILTIN_IDS.join(", "));
    ExitCode::FAILURE
}

async fn wait_for_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
