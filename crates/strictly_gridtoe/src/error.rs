//! Error types for board, session, and configuration operations.

use derive_more::{Display, Error};

/// Error returned by any fallible game operation.
///
/// All variants are recoverable: the caller is expected to re-prompt or
/// correct its input. The core never retries on its own.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Coordinates fall outside the grid.
    #[display("Cell ({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the board.
        size: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A move was submitted while no game is in progress.
    #[display("Invalid move: {}", _0)]
    InvalidMove(#[error(not(source))] String),

    /// Settings violate size, win-condition, or symbol constraints.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(#[error(not(source))] String),
}

impl GameError {
    /// Builds an [`GameError::InvalidConfiguration`] from any message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
