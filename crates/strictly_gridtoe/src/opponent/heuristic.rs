//! Rule-cascade opponent: win, block, center, corner, anything.

use crate::board::Board;
use crate::probe::would_win;
use crate::types::{Cell, Mark};
use rand::Rng;
use rand::seq::SliceRandom;
use strum::Display;
use tracing::debug;

/// The rule that produced a heuristic move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Rule {
    /// Completes a run for the engine.
    Win,
    /// Occupies the cell that would complete the opponent's run.
    Block,
    /// Takes the center of a 3x3 board.
    Center,
    /// Takes a random empty corner.
    Corner,
    /// Takes a random empty cell.
    Fallback,
}

/// Picks a move by the first applicable rule.
///
/// Win and block probes scan empty cells in row-major order and restore the
/// scratch board after each probe.
pub fn choose<R: Rng + ?Sized>(
    board: &Board,
    own: Mark,
    win_condition: usize,
    rng: &mut R,
) -> Option<Cell> {
    let (cell, rule) = choose_with_rule(board, own, win_condition, rng)?;
    debug!(%cell, %rule, "Heuristic move selected");
    Some(cell)
}

/// Like [`choose`], also reporting which rule fired.
pub fn choose_with_rule<R: Rng + ?Sized>(
    board: &Board,
    own: Mark,
    win_condition: usize,
    rng: &mut R,
) -> Option<(Cell, Rule)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let mut scratch = board.clone();
    for (mark, rule) in [(own, Rule::Win), (own.opponent(), Rule::Block)] {
        if let Some(&cell) = empty
            .iter()
            .find(|&&cell| would_win(&mut scratch, cell, mark, win_condition))
        {
            return Some((cell, rule));
        }
    }

    if board.size() == 3
        && let Some(center) = board.center().filter(|&c| board.is_empty_at(c))
    {
        return Some((center, Rule::Center));
    }

    let corners: Vec<Cell> = board
        .corners()
        .into_iter()
        .filter(|&c| board.is_empty_at(c))
        .collect();
    if let Some(&corner) = corners.choose(rng) {
        return Some((corner, Rule::Corner));
    }

    empty.choose(rng).map(|&cell| (cell, Rule::Fallback))
}
