//! Core domain types shared by the board, rules, and session.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Which of the two seats owns a cell.
///
/// The board stores marks rather than display symbols so that symbols can
/// be reconfigured without touching the rules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Mark {
    /// Player one (moves first).
    First,
    /// Player two.
    Second,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    /// Index of this mark into two-element per-player arrays.
    pub fn index(self) -> usize {
        match self {
            Mark::First => 0,
            Mark::Second => 1,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Mark),
}

impl Square {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// True when no mark is present.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// A (row, column) coordinate, zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_new::new,
)]
pub struct Cell {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four line directions a run can follow, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Direction {
    /// Left to right, step (0, 1).
    Horizontal,
    /// Top to bottom, step (1, 0).
    Vertical,
    /// Top-left to bottom-right, step (1, 1).
    Diagonal,
    /// Top-right to bottom-left, step (1, -1).
    AntiDiagonal,
}

impl Direction {
    /// Row and column step for one move forward along this direction.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// The two display tokens used for [`Mark::First`] and [`Mark::Second`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolPair {
    first: String,
    second: String,
}

impl SymbolPair {
    /// Creates a symbol pair, rejecting empty or identical tokens.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self, GameError> {
        let pair = Self {
            first: first.into(),
            second: second.into(),
        };
        pair.validate()?;
        Ok(pair)
    }

    /// Checks that both symbols are non-empty and distinct.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.first.trim().is_empty() || self.second.trim().is_empty() {
            return Err(GameError::config("player symbols must not be empty"));
        }
        if self.first == self.second {
            return Err(GameError::config(format!(
                "player symbols must differ (both are {:?})",
                self.first
            )));
        }
        Ok(())
    }

    /// Returns the symbol shown for the given mark.
    pub fn symbol(&self, mark: Mark) -> &str {
        match mark {
            Mark::First => &self.first,
            Mark::Second => &self.second,
        }
    }
}

impl Default for SymbolPair {
    fn default() -> Self {
        Self {
            first: "X".to_string(),
            second: "O".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for mark in Mark::iter() {
            assert_ne!(mark, mark.opponent());
            assert_eq!(mark, mark.opponent().opponent());
        }
    }

    #[test]
    fn test_direction_order() {
        let order: Vec<_> = Direction::iter().map(Direction::step).collect();
        assert_eq!(order, vec![(0, 1), (1, 0), (1, 1), (1, -1)]);
    }

    #[test]
    fn test_symbol_pair_rejects_duplicates() {
        assert!(matches!(
            SymbolPair::new("X", "X"),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SymbolPair::new("", "O"),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_symbol_lookup() {
        let symbols = SymbolPair::new("🐱", "🐶").unwrap();
        assert_eq!(symbols.symbol(Mark::First), "🐱");
        assert_eq!(symbols.symbol(Mark::Second), "🐶");
    }
}
