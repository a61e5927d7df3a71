//! Command-line interface for gridtoe.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_gridtoe::{Difficulty, GameConfig, Mode, SymbolPair};
use tracing::instrument;

/// Gridtoe - tic-tac-toe on boards from 3x3 to 10x10
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Configurable tic-tac-toe with scripted opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding settings.toml and scores.json
    #[arg(long, global = true, env = "GRIDTOE_DATA_DIR", default_value = ".gridtoe")]
    pub data_dir: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Settings overrides, saved for next time
        #[command(flatten)]
        settings: SettingsArgs,

        /// Pause before showing the opponent's reply, in milliseconds
        #[arg(long, default_value = "0")]
        think_ms: u64,

        /// Name for the first seat
        #[arg(long)]
        first_name: Option<String>,

        /// Name for the second seat
        #[arg(long)]
        second_name: Option<String>,

        /// Seed the opponent for reproducible play
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two engines against each other
    Simulate {
        /// Engine in the first seat (moves first)
        #[arg(long, default_value = "minimax")]
        first: Difficulty,

        /// Engine in the second seat
        #[arg(long, default_value = "random")]
        second: Difficulty,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// RNG seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Board side length
        #[arg(long, default_value = "3")]
        size: usize,

        /// Run length needed to win
        #[arg(long, default_value = "3")]
        win: usize,

        /// Minimax depth limit in plies (default: sized to the board)
        #[arg(long)]
        depth: Option<usize>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show stored scores
    Scores {
        /// Zero both players' records
        #[arg(long)]
        reset: bool,
    },

    /// Show stored settings, updating them with any flags given
    Settings {
        /// Settings overrides
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

/// Who plays the second seat.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans share the terminal
    Human,
    /// The second seat is played by the computer
    Opponent,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Human => Mode::HumanVsHuman,
            ModeArg::Opponent => Mode::HumanVsOpponent,
        }
    }
}

/// Game settings that can be overridden from the command line.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsArgs {
    /// Board side length (3-10)
    #[arg(long)]
    pub size: Option<usize>,

    /// Run length needed to win (3 to size)
    #[arg(long)]
    pub win: Option<usize>,

    /// Two distinct symbols, comma separated (e.g. X,O)
    #[arg(long)]
    pub symbols: Option<String>,

    /// Second seat: human or opponent
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Opponent strength: random, heuristic, or minimax
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Minimax depth limit in plies (default: sized to the board)
    #[arg(long)]
    pub depth: Option<usize>,
}

impl SettingsArgs {
    /// True when no override was given.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layers these overrides onto `base` and validates the result.
    ///
    /// # Errors
    ///
    /// Fails when `--symbols` is malformed or the merged settings are invalid.
    #[instrument(skip(base))]
    pub fn apply(&self, base: GameConfig) -> anyhow::Result<GameConfig> {
        let mut config = base;
        if let Some(size) = self.size {
            config = config.with_size(size);
        }
        if let Some(win) = self.win {
            config = config.with_win_condition(win);
        }
        if let Some(symbols) = &self.symbols {
            let (first, second) = symbols
                .split_once(',')
                .with_context(|| format!("symbols must look like `X,O`, got `{symbols}`"))?;
            config = config.with_symbols(SymbolPair::new(first.trim(), second.trim())?);
        }
        if let Some(mode) = self.mode {
            config = config.with_mode(mode.into());
        }
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(depth) = self.depth {
            config = config.with_search_depth(Some(depth));
        }
        config.validate()?;
        Ok(config)
    }
}
