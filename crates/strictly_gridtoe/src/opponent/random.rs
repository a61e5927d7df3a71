//! Uniformly random move selection.

use crate::board::Board;
use crate::types::Cell;
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks any empty cell with equal probability.
pub fn choose<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Cell> {
    board.empty_cells().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_only_picks_empty_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(3).unwrap();
        for cell in board.cells().take(8).collect::<Vec<_>>() {
            board.place(cell, Mark::First).unwrap();
        }
        for _ in 0..20 {
            assert_eq!(choose(&board, &mut rng), Some(Cell::new(2, 2)));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(3).unwrap();
        for cell in board.cells().collect::<Vec<_>>() {
            board.place(cell, Mark::Second).unwrap();
        }
        assert_eq!(choose(&board, &mut rng), None);
    }

    #[test]
    fn test_covers_every_empty_cell() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::new(3).unwrap();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.extend(choose(&board, &mut rng));
        }
        assert_eq!(seen.len(), 9);
    }
}
