//! Gridtoe - terminal tic-tac-toe.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use strictly_gridtoe::{GameSession, Mark};
use strictly_gridtoe_cli::{Cli, Command, SettingsArgs, Store, play, simulate, terminal};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = Store::new(&cli.data_dir);
    debug!(data_dir = %store.dir().display(), "Store ready");

    match cli.command {
        Command::Play {
            settings,
            think_ms,
            first_name,
            second_name,
            seed,
        } => run_play(
            &store,
            &settings,
            Duration::from_millis(think_ms),
            [first_name, second_name],
            seed,
        ),
        Command::Simulate {
            first,
            second,
            games,
            seed,
            size,
            win,
            depth,
            json,
        } => {
            let overrides = SettingsArgs {
                size: Some(size),
                win: Some(win),
                depth,
                ..Default::default()
            };
            let config = overrides.apply(store.load_settings())?;
            let tally = simulate(&config, first, second, games, seed)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tally)?);
            } else {
                println!("{first} vs {second} on {size}x{size}, {win} in a row");
                println!("{tally}");
            }
            Ok(())
        }
        Command::Scores { reset } => run_scores(&store, reset),
        Command::Settings { settings } => run_settings(&store, &settings),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(store, settings, names))]
fn run_play(
    store: &Store,
    settings: &SettingsArgs,
    think: Duration,
    names: [Option<String>; 2],
    seed: Option<u64>,
) -> Result<()> {
    let config = settings.apply(store.load_settings())?;
    store.save_settings(&config)?;

    let mut session = GameSession::restore(config, store.load_players())?;
    if let Some(seed) = seed {
        session = session.with_engine_seed(seed);
    }
    for (mark, name) in [Mark::First, Mark::Second].into_iter().zip(names) {
        if let Some(name) = name {
            session.rename_player(mark, name);
        }
    }

    info!("Starting interactive game");
    let stdin = std::io::stdin();
    play::run(&mut session, store, think, stdin.lock(), std::io::stdout())
}

/// Print or reset the stored scoreboard
#[instrument(skip(store))]
fn run_scores(store: &Store, reset: bool) -> Result<()> {
    let mut session = GameSession::restore(store.load_settings(), store.load_players())?;
    if reset {
        session.reset_scores();
        store.save_players(session.players())?;
        println!("Scores reset.");
    }
    println!("{}", terminal::render_scores(&session.snapshot()));
    Ok(())
}

/// Print stored settings, saving any overrides first
#[instrument(skip(store, settings))]
fn run_settings(store: &Store, settings: &SettingsArgs) -> Result<()> {
    let mut config = store.load_settings();
    if !settings.is_empty() {
        config = settings.apply(config)?;
        store.save_settings(&config)?;
    }
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
