//! Scoped hypothetical placements.
//!
//! A [`Probe`] places a mark and removes it again when dropped, so search
//! code can return early from any branch without leaking a speculative move
//! into the board it was given.

use crate::board::Board;
use crate::error::GameError;
use crate::rules::{WinningLine, check_win};
use crate::types::{Cell, Mark};
use std::ops::{Deref, DerefMut};

/// A mark placed for the lifetime of the guard.
#[derive(Debug)]
pub struct Probe<'a> {
    board: &'a mut Board,
    cell: Cell,
}

impl<'a> Probe<'a> {
    /// Places `mark` at `cell` until the returned guard drops.
    ///
    /// # Errors
    ///
    /// Fails like [`Board::place`]; nothing is placed in that case.
    pub fn place(board: &'a mut Board, cell: Cell, mark: Mark) -> Result<Self, GameError> {
        board.place(cell, mark)?;
        Ok(Self { board, cell })
    }

    /// Checks whether the probed placement wins.
    pub fn wins(&self, win_condition: usize) -> Option<WinningLine> {
        check_win(&*self.board, self.cell, win_condition)
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.clear(self.cell);
    }
}

/// Checks whether placing `mark` at `cell` would win, leaving `board`
/// exactly as it was. Occupied or off-grid cells never win.
pub fn would_win(board: &mut Board, cell: Cell, mark: Mark, win_condition: usize) -> bool {
    Probe::place(board, cell, mark)
        .map(|probe| probe.wins(win_condition).is_some())
        .unwrap_or(false)
}
