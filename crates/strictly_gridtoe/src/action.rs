//! Moves as first-class records.

use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// A mark placed at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The seat that moved.
    pub mark: Mark,
    /// Where the mark went.
    pub cell: Cell,
    /// True when the opponent engine chose this move.
    pub by_engine: bool,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let who = if self.by_engine { " (engine)" } else { "" };
        write!(f, "{}{} -> {}", self.mark, who, self.cell)
    }
}
