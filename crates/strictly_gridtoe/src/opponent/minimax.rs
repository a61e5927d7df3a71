//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are from the engine's point of view: a win found at depth `d`
//! scores `10 - d`, a loss `d - 10`, and a draw or a cut-off at the depth
//! limit scores `0`. Root moves sit at depth 1. Moves are enumerated in
//! row-major order and the first of several equally scored root moves wins.
//!
//! Without an explicit limit the depth comes from [`auto_depth`], which keeps
//! the full [`DEFAULT_SEARCH_DEPTH`] on boards up to 4x4 and otherwise picks
//! the deepest search whose unpruned move-sequence count fits
//! [`NODE_BUDGET`].

use super::DEFAULT_SEARCH_DEPTH;
use crate::board::Board;
use crate::probe::Probe;
use crate::rules::check_win;
use crate::types::{Cell, Mark};
use tracing::{debug, instrument};

/// Score magnitude of an immediate win.
pub const WIN_SCORE: i32 = 10;

/// Largest board side that always gets [`DEFAULT_SEARCH_DEPTH`].
pub const FULL_DEPTH_MAX_SIZE: usize = 4;

/// Cap on `e * (e - 1) * ...` move sequences for automatic depth, where
/// `e` is the number of empty cells.
pub const NODE_BUDGET: u64 = 1_000_000;

/// Shallowest automatic depth: the engine's move plus the reply, enough to
/// see every win-in-one for either side.
pub const MIN_AUTO_DEPTH: usize = 2;

/// Search depth for `board` when none was set explicitly.
pub fn auto_depth(board: &Board) -> usize {
    if board.size() <= FULL_DEPTH_MAX_SIZE {
        return DEFAULT_SEARCH_DEPTH;
    }
    let empty = board.empty_cells().len() as u64;
    let mut sequences: u64 = 1;
    let mut depth = 0;
    while depth < DEFAULT_SEARCH_DEPTH && (depth as u64) < empty {
        sequences = sequences.saturating_mul(empty - depth as u64);
        if sequences > NODE_BUDGET {
            break;
        }
        depth += 1;
    }
    depth.max(MIN_AUTO_DEPTH)
}

/// Picks the best move for `own`, searching at most `depth_limit` plies.
#[instrument(skip(board), fields(size = board.size()))]
pub fn choose(board: &Board, own: Mark, win_condition: usize, depth_limit: usize) -> Option<Cell> {
    let mut search = Search {
        own,
        win_condition,
        depth_limit,
        nodes: 0,
    };
    let mut scratch = board.clone();
    let mut alpha = i32::MIN;
    let mut best: Option<(Cell, i32)> = None;

    for cell in board.empty_cells() {
        let Ok(mut probe) = Probe::place(&mut scratch, cell, own) else {
            continue;
        };
        let score = search.score(&mut probe, cell, own, 1, alpha, i32::MAX);
        drop(probe);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((cell, score));
            alpha = alpha.max(score);
        }
    }

    if let Some((cell, score)) = best {
        debug!(%cell, score, nodes = search.nodes, "Minimax move selected");
    }
    best.map(|(cell, _)| cell)
}

struct Search {
    own: Mark,
    win_condition: usize,
    depth_limit: usize,
    nodes: u64,
}

impl Search {
    /// Scores the position reached by `last_mark` playing `last` at `depth`.
    fn score(
        &mut self,
        board: &mut Board,
        last: Cell,
        last_mark: Mark,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        let signed_depth = depth as i32;

        if check_win(board, last, self.win_condition).is_some() {
            return if last_mark == self.own {
                WIN_SCORE - signed_depth
            } else {
                signed_depth - WIN_SCORE
            };
        }
        if board.is_full() || depth >= self.depth_limit {
            return 0;
        }

        let to_move = last_mark.opponent();
        let maximizing = to_move == self.own;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for cell in board.empty_cells() {
            let Ok(mut probe) = Probe::place(board, cell, to_move) else {
                continue;
            };
            let value = self.score(&mut probe, cell, to_move, depth + 1, alpha, beta);
            drop(probe);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}
