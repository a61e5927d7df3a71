//! Scripted opponents.
//!
//! An [`OpponentEngine`] is built for one [`Difficulty`] and keeps it for its
//! whole lifetime; reconfiguring means building a new engine. Every tier works
//! on a private copy of the board it is handed.

pub mod heuristic;
pub mod minimax;
pub mod random;

use crate::board::Board;
use crate::types::{Cell, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, instrument};

/// Deepest automatic minimax search, in plies.
///
/// Boards up to 4x4 always search this deep unless a depth is set
/// explicitly; larger boards get [`minimax::auto_depth`].
pub const DEFAULT_SEARCH_DEPTH: usize = 6;

/// Opponent strength tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Random,
    /// Win, block, center, corner, then anything.
    #[default]
    Heuristic,
    /// Depth-limited minimax with alpha-beta pruning.
    Minimax,
}

/// Move selector for one difficulty tier.
#[derive(Debug, Clone)]
pub struct OpponentEngine {
    difficulty: Difficulty,
    /// Explicit minimax depth; `None` sizes the search to the board.
    search_depth: Option<usize>,
    rng: StdRng,
}

impl OpponentEngine {
    /// Creates an engine seeded from system entropy.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            search_depth: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an engine with a fixed seed for reproducible play.
    #[instrument]
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            search_depth: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fixes the minimax depth limit (ignored by the other tiers).
    ///
    /// A limit of zero is treated as one ply. An explicit limit is used on
    /// every board size, however slow that makes the search.
    pub fn with_search_depth(mut self, depth: usize) -> Self {
        self.search_depth = Some(depth.max(1));
        self
    }

    /// The configured tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The explicit minimax depth limit, if one was set.
    pub fn search_depth(&self) -> Option<usize> {
        self.search_depth
    }

    /// The depth minimax will search on `board`.
    pub fn depth_for(&self, board: &Board) -> usize {
        self.search_depth.unwrap_or_else(|| minimax::auto_depth(board))
    }

    /// Chooses a move for `own` against `own.opponent()`.
    ///
    /// Returns `None` only when the board has no empty cell. The returned
    /// cell is always empty on `board`, which is never modified.
    #[instrument(skip(self, board), fields(difficulty = %self.difficulty, size = board.size()))]
    pub fn decide(&mut self, board: &Board, own: Mark, win_condition: usize) -> Option<Cell> {
        let choice = match self.difficulty {
            Difficulty::Random => random::choose(board, &mut self.rng),
            Difficulty::Heuristic => heuristic::choose(board, own, win_condition, &mut self.rng),
            Difficulty::Minimax => {
                minimax::choose(board, own, win_condition, self.depth_for(board))
            }
        };
        debug!(?choice, ?own, "Opponent decided");
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!(Difficulty::from_str("minimax"), Ok(Difficulty::Minimax));
        assert_eq!(Difficulty::from_str("Random"), Ok(Difficulty::Random));
        assert!(Difficulty::from_str("impossible").is_err());
        assert_eq!(Difficulty::Heuristic.to_string(), "heuristic");
    }

    #[test]
    fn test_every_tier_returns_empty_cell() {
        for difficulty in Difficulty::iter() {
            let mut engine = OpponentEngine::seeded(difficulty, 11);
            let mut board = Board::new(3).unwrap();
            board.place(Cell::new(1, 1), Mark::First).unwrap();
            let before = board.clone();

            let cell = engine.decide(&board, Mark::Second, 3).unwrap();
            assert!(board.is_empty_at(cell), "{difficulty} picked {cell}");
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let mut board = Board::new(3).unwrap();
        for (i, cell) in board.cells().collect::<Vec<_>>().into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::First } else { Mark::Second };
            board.place(cell, mark).unwrap();
        }
        for difficulty in Difficulty::iter() {
            let mut engine = OpponentEngine::seeded(difficulty, 0);
            assert_eq!(engine.decide(&board, Mark::First, 3), None);
        }
    }

    #[test]
    fn test_seeded_engines_repeat() {
        let board = Board::new(5).unwrap();
        let mut a = OpponentEngine::seeded(Difficulty::Random, 99);
        let mut b = OpponentEngine::seeded(Difficulty::Random, 99);
        for _ in 0..10 {
            assert_eq!(a.decide(&board, Mark::First, 4), b.decide(&board, Mark::First, 4));
        }
    }

    #[test]
    fn test_search_depth_floor() {
        let engine = OpponentEngine::new(Difficulty::Minimax).with_search_depth(0);
        assert_eq!(engine.search_depth(), Some(1));
    }

    #[test]
    fn test_explicit_depth_overrides_board_size() {
        let board = Board::new(10).unwrap();
        let auto = OpponentEngine::new(Difficulty::Minimax);
        let fixed = OpponentEngine::new(Difficulty::Minimax).with_search_depth(5);
        assert_eq!(auto.search_depth(), None);
        assert_eq!(auto.depth_for(&board), minimax::auto_depth(&board));
        assert_eq!(fixed.depth_for(&board), 5);
    }

    #[test]
    fn test_minimax_on_large_board_answers_quickly() {
        let mut board = Board::new(10).unwrap();
        board.place(Cell::new(5, 5), Mark::First).unwrap();
        let mut engine = OpponentEngine::seeded(Difficulty::Minimax, 1);

        let started = std::time::Instant::now();
        let cell = engine.decide(&board, Mark::Second, 3).unwrap();
        let elapsed = started.elapsed();

        assert!(board.is_empty_at(cell));
        assert!(
            elapsed < std::time::Duration::from_secs(10),
            "10x10 decision took {elapsed:?}"
        );
    }
}
