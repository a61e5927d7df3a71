//! Player identity and running tallies.

use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A seat's display name, cumulative wins, and games played.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    /// Display name.
    name: String,
    /// Games won.
    #[new(default)]
    #[serde(default)]
    score: u32,
    /// Games finished, won or drawn or lost.
    #[new(default)]
    #[serde(default)]
    games_played: u32,
}

impl Player {
    /// Default player for a seat: "Player 1" or "Player 2".
    pub fn for_mark(mark: Mark) -> Self {
        Self::new(format!("Player {}", mark.index() + 1))
    }

    /// Restores a player with existing tallies.
    pub fn with_record(name: impl Into<String>, score: u32, games_played: u32) -> Self {
        Self {
            name: name.into(),
            score,
            games_played,
        }
    }

    /// Renames the player.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn record_win(&mut self) {
        self.score += 1;
        self.games_played += 1;
    }

    pub(crate) fn record_game(&mut self) {
        self.games_played += 1;
    }

    pub(crate) fn clear_record(&mut self) {
        self.score = 0;
        self.games_played = 0;
    }
}
