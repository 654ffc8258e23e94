use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::protocol::decode_action_log;
use store::{AppState, Store, UiState};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, Settings};

#[derive(Parser, Debug)]
struct Cli {
    /// Settings file; `store.toml` in the working directory is used when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dispatch a JSON-lines action log and print the final snapshot.
    Replay { actions: PathBuf },
    /// Print the initial snapshot.
    Initial,
}

fn initial_state(settings: &Settings) -> AppState {
    AppState {
        ui: UiState::with_preferences(settings.sidebar_open, settings.dark_mode),
        ..AppState::default()
    }
}

fn replay(store: &mut Store, raw: &str) -> Result<()> {
    let actions = decode_action_log(raw)?;
    for action in actions {
        store.dispatch(action);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    let filter = EnvFilter::try_new(&settings.log_filter)
        .with_context(|| format!("invalid log filter '{}'", settings.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut store = Store::new(initial_state(&settings));

    match cli.command {
        Command::Replay { actions } => {
            let raw = fs::read_to_string(&actions)
                .with_context(|| format!("failed to read action log '{}'", actions.display()))?;
            replay(&mut store, &raw)
                .with_context(|| format!("replay of '{}' aborted", actions.display()))?;
            info!(
                dispatched = store.dispatched(),
                bands = store.bands().bands.len(),
                "replay finished"
            );
        }
        Command::Initial => {}
    }

    println!("{}", serde_json::to_string_pretty(store.state())?);
    Ok(())
}
