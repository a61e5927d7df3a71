//! Win detection by scanning outward from the most recent placement.

use crate::board::Board;
use crate::types::{Cell, Direction, Mark, Square};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// A run of same-mark cells long enough to win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinningLine {
    /// Owner of the run.
    pub mark: Mark,
    /// Direction the run follows.
    pub direction: Direction,
    /// Cells of the run in row-major order, including the placed cell.
    pub cells: Vec<Cell>,
}

/// Result of evaluating a placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// No win and empty cells remain.
    InProgress,
    /// The placement completed a run.
    Won(WinningLine),
    /// The board is full without a winning run.
    Draw,
}

/// Checks whether the mark at `cell` is part of a run of at least
/// `win_condition` cells.
///
/// Directions are tried in [`Direction`] order and the first qualifying one
/// is reported; cells from different directions are never merged. Only the
/// cells reachable from `cell` along each line are inspected. An empty or
/// off-grid `cell` never wins.
#[instrument(level = "trace", skip(board), fields(size = board.size()))]
pub fn check_win(board: &Board, cell: Cell, win_condition: usize) -> Option<WinningLine> {
    let mark = board.square(cell)?.mark()?;

    for direction in Direction::iter() {
        let (dr, dc) = direction.step();
        let mut cells = vec![cell];
        cells.extend(run(board, cell, mark, dr, dc));
        cells.extend(run(board, cell, mark, -dr, -dc));

        if cells.len() >= win_condition {
            cells.sort();
            trace!(?mark, %direction, length = cells.len(), "Winning run found");
            return Some(WinningLine {
                mark,
                direction,
                cells,
            });
        }
    }

    None
}

/// Classifies the board after a placement at `last`.
///
/// A full board is a draw only when the final placement did not complete a
/// run.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board, last: Cell, win_condition: usize) -> Outcome {
    match check_win(board, last, win_condition) {
        Some(line) => Outcome::Won(line),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// Cells holding `mark` strictly beyond `from`, stepping by (dr, dc) until
/// the run breaks or the grid ends.
fn run(board: &Board, from: Cell, mark: Mark, dr: isize, dc: isize) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut current = from;
    while let Some(next) = offset(current, dr, dc) {
        if board.square(next) != Some(Square::Occupied(mark)) {
            break;
        }
        cells.push(next);
        current = next;
    }
    cells
}

fn offset(cell: Cell, dr: isize, dc: isize) -> Option<Cell> {
    Some(Cell::new(
        cell.row.checked_add_signed(dr)?,
        cell.col.checked_add_signed(dc)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[((usize, usize), Mark)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &((row, col), mark) in marks {
            board.place(Cell::new(row, col), mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_cell() {
        let board = Board::new(3).unwrap();
        assert_eq!(check_win(&board, Cell::new(1, 1), 3), None);
        assert_eq!(check_win(&board, Cell::new(9, 9), 3), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            3,
            &[((0, 0), Mark::First), ((0, 1), Mark::First), ((0, 2), Mark::First)],
        );
        let line = check_win(&board, Cell::new(0, 2), 3).unwrap();
        assert_eq!(line.mark, Mark::First);
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(
            line.cells,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
        );
    }

    #[test]
    fn test_middle_placement_counts_both_halves() {
        let board = board_with(
            5,
            &[((2, 0), Mark::Second), ((2, 1), Mark::Second), ((2, 3), Mark::Second)],
        );
        assert_eq!(check_win(&board, Cell::new(2, 1), 4), None);

        let mut board = board;
        board.place(Cell::new(2, 2), Mark::Second).unwrap();
        let line = check_win(&board, Cell::new(2, 2), 4).unwrap();
        assert_eq!(line.cells.len(), 4);
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(
            4,
            &[((0, 3), Mark::Second), ((1, 2), Mark::Second), ((2, 1), Mark::Second)],
        );
        let line = check_win(&board, Cell::new(1, 2), 3).unwrap();
        assert_eq!(line.direction, Direction::AntiDiagonal);
        assert_eq!(
            line.cells,
            vec![Cell::new(0, 3), Cell::new(1, 2), Cell::new(2, 1)]
        );
    }

    #[test]
    fn test_directions_are_not_merged() {
        // Horizontal pair and vertical pair share (1, 1); neither reaches 3.
        let board = board_with(
            3,
            &[((1, 0), Mark::First), ((1, 1), Mark::First), ((0, 1), Mark::First)],
        );
        assert_eq!(check_win(&board, Cell::new(1, 1), 3), None);
    }

    #[test]
    fn test_opponent_marks_break_runs() {
        let board = board_with(
            4,
            &[
                ((0, 0), Mark::First),
                ((0, 1), Mark::First),
                ((0, 2), Mark::Second),
                ((0, 3), Mark::First),
            ],
        );
        assert_eq!(check_win(&board, Cell::new(0, 1), 3), None);
    }

    #[test]
    fn test_evaluate_classifies() {
        let board = board_with(3, &[((0, 0), Mark::First)]);
        assert_eq!(evaluate(&board, Cell::new(0, 0), 3), Outcome::InProgress);

        let full = board_with(
            3,
            &[
                ((0, 0), Mark::First),
                ((0, 1), Mark::Second),
                ((0, 2), Mark::First),
                ((1, 0), Mark::First),
                ((1, 1), Mark::Second),
                ((1, 2), Mark::Second),
                ((2, 0), Mark::Second),
                ((2, 1), Mark::First),
                ((2, 2), Mark::First),
            ],
        );
        assert_eq!(evaluate(&full, Cell::new(2, 2), 3), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_final_win_is_won() {
        // X X X / O O X / X O O, the last move completes the top row
        let full = board_with(
            3,
            &[
                ((0, 0), Mark::First),
                ((0, 1), Mark::First),
                ((0, 2), Mark::First),
                ((1, 0), Mark::Second),
                ((1, 1), Mark::Second),
                ((1, 2), Mark::First),
                ((2, 0), Mark::First),
                ((2, 1), Mark::Second),
                ((2, 2), Mark::Second),
            ],
        );
        assert!(full.is_full());
        assert!(matches!(
            evaluate(&full, Cell::new(0, 1), 3),
            Outcome::Won(WinningLine { mark: Mark::First, .. })
        ));
    }
}
