//! Game configuration and its validation.

use crate::board::{MAX_SIZE, MIN_SIZE};
use crate::error::GameError;
use crate::opponent::Difficulty;
use crate::types::SymbolPair;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::instrument;

/// Smallest allowed win condition.
pub const MIN_WIN_CONDITION: usize = 3;

/// Who controls the second seat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    HumanVsHuman,
    /// The second seat is played by an [`OpponentEngine`](crate::OpponentEngine).
    HumanVsOpponent,
}

/// Everything needed to start a session.
///
/// Deserialized values are not trusted; call [`GameConfig::validate`] (the
/// session does) before use.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Board side length.
    size: usize,
    /// Run length needed to win.
    win_condition: usize,
    /// Human-vs-human or human-vs-opponent.
    mode: Mode,
    /// Opponent tier when `mode` is [`Mode::HumanVsOpponent`].
    difficulty: Difficulty,
    /// Minimax depth limit in plies; `None` sizes the search to the board.
    #[serde(skip_serializing_if = "Option::is_none")]
    search_depth: Option<usize>,
    /// Display symbols for the two seats.
    symbols: SymbolPair,
}

impl GameConfig {
    /// Checks every configuration constraint.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] when the size is outside
    /// 3..=10, the win condition is outside 3..=size, the symbols are empty or
    /// equal, or an explicit search depth is zero.
    #[instrument]
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(GameError::config(format!(
                "board size {} must be between {} and {}",
                self.size, MIN_SIZE, MAX_SIZE
            )));
        }
        if !(MIN_WIN_CONDITION..=self.size).contains(&self.win_condition) {
            return Err(GameError::config(format!(
                "win condition {} must be between {} and the board size {}",
                self.win_condition, MIN_WIN_CONDITION, self.size
            )));
        }
        self.symbols.validate()?;
        if self.search_depth == Some(0) {
            return Err(GameError::config("search depth must be at least 1"));
        }
        Ok(())
    }

    /// True when the second seat is engine-controlled.
    pub fn has_opponent(&self) -> bool {
        self.mode == Mode::HumanVsOpponent
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            win_condition: 3,
            mode: Mode::default(),
            difficulty: Difficulty::default(),
            search_depth: None,
            symbols: SymbolPair::default(),
        }
    }
}
