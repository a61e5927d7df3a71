//! Strictly Gridtoe CLI - terminal shell for the gridtoe engine
//!
//! Renders boards as text, reads moves from a line-oriented input, runs
//! engine-versus-engine matches, and persists settings and scores between
//! runs. All game rules live in [`strictly_gridtoe`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod error;

pub mod play;
pub mod simulate;
pub mod store;
pub mod terminal;

pub use cli::{Cli, Command, ModeArg, SettingsArgs};
pub use error::StoreError;
pub use simulate::{Tally, simulate};
pub use store::{SCORES_FILE, SETTINGS_FILE, Store};
