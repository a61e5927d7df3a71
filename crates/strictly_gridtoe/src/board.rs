//! Square N-by-N board storage.

use crate::error::GameError;
use crate::types::{Cell, Mark, Square, SymbolPair};
use serde::Serialize;
use tracing::{debug, instrument};

/// Smallest supported side length.
pub const MIN_SIZE: usize = 3;

/// Largest supported side length.
pub const MAX_SIZE: usize = 10;

/// Square tic-tac-toe board with side length between [`MIN_SIZE`] and [`MAX_SIZE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board of the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if `size` is outside 3..=10.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        check_size(size)?;
        Ok(Self {
            size,
            squares: vec![Square::Empty; size * size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the square at `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the grid.
    pub fn get(&self, cell: Cell) -> Result<Square, GameError> {
        let idx = self.index(cell)?;
        Ok(self.squares[idx])
    }

    /// Places `mark` on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the grid and
    /// [`GameError::CellOccupied`] if the cell already holds a mark. The board
    /// is unchanged on error.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, cell: Cell, mark: Mark) -> Result<(), GameError> {
        let idx = self.index(cell)?;
        if !self.squares[idx].is_empty() {
            debug!(%cell, "Rejected placement on occupied cell");
            return Err(GameError::CellOccupied {
                row: cell.row,
                col: cell.col,
            });
        }
        self.squares[idx] = Square::Occupied(mark);
        Ok(())
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Replaces the grid with an empty one of the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if `size` is outside 3..=10;
    /// the existing grid is kept in that case.
    #[instrument(skip(self), fields(old_size = self.size))]
    pub fn reset(&mut self, size: usize) -> Result<(), GameError> {
        check_size(size)?;
        self.size = size;
        self.squares = vec![Square::Empty; size * size];
        Ok(())
    }

    /// Empties every cell, keeping the side length.
    pub fn clear_all(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// True when `cell` lies on the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Square at `cell`, or `None` when off the grid.
    pub fn square(&self, cell: Cell) -> Option<Square> {
        self.index(cell).ok().map(|idx| self.squares[idx])
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells().filter(|&cell| self.is_empty_at(cell)).collect()
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }

    /// The four corner cells, clockwise from the top-left.
    pub fn corners(&self) -> [Cell; 4] {
        let last = self.size - 1;
        [
            Cell::new(0, 0),
            Cell::new(0, last),
            Cell::new(last, last),
            Cell::new(last, 0),
        ]
    }

    /// The middle cell for odd side lengths.
    pub fn center(&self) -> Option<Cell> {
        (self.size % 2 == 1).then(|| Cell::new(self.size / 2, self.size / 2))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Checks if an on-grid cell is empty. Off-grid cells count as not empty.
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        matches!(self.square(cell), Some(Square::Empty))
    }

    /// Rows of squares, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size)
    }

    /// Formats the board as a human-readable grid using the given symbols.
    ///
    /// Empty cells render as `.`; columns are padded to the widest symbol.
    pub fn render(&self, symbols: &SymbolPair) -> String {
        let width = symbols
            .symbol(Mark::First)
            .chars()
            .count()
            .max(symbols.symbol(Mark::Second).chars().count())
            .max(1);
        let mut result = String::new();
        for (row_idx, row) in self.rows().enumerate() {
            let line: Vec<String> = row
                .iter()
                .map(|square| {
                    let text = match square {
                        Square::Empty => ".",
                        Square::Occupied(mark) => symbols.symbol(*mark),
                    };
                    format!("{:^width$}", text, width = width)
                })
                .collect();
            result.push_str(&line.join("|"));
            if row_idx + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }

    /// Clears a cell. Only the probe guard may undo placements.
    pub(crate) fn clear(&mut self, cell: Cell) {
        if let Ok(idx) = self.index(cell) {
            self.squares[idx] = Square::Empty;
        }
    }

    fn index(&self, cell: Cell) -> Result<usize, GameError> {
        if !self.contains(cell) {
            return Err(GameError::OutOfBounds {
                row: cell.row,
                col: cell.col,
                size: self.size,
            });
        }
        Ok(cell.row * self.size + cell.col)
    }
}

fn check_size(size: usize) -> Result<(), GameError> {
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(GameError::config(format!(
            "board size {} must be between {} and {}",
            size, MIN_SIZE, MAX_SIZE
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_boards_are_empty() {
        for size in MIN_SIZE..=MAX_SIZE {
            let board = Board::new(size).unwrap();
            assert!(!board.is_full());
            assert_eq!(board.occupied_count(), 0);
            assert_eq!(board.empty_cells().len(), size * size);
        }
    }

    #[test]
    fn test_size_limits() {
        assert!(matches!(Board::new(2), Err(GameError::InvalidConfiguration(_))));
        assert!(matches!(Board::new(11), Err(GameError::InvalidConfiguration(_))));

        let mut board = Board::new(3).unwrap();
        assert!(board.reset(0).is_err());
        assert_eq!(board.size(), 3);
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new(4).unwrap();
        board.place(Cell::new(3, 2), Mark::First).unwrap();
        assert_eq!(board.get(Cell::new(3, 2)), Ok(Square::Occupied(Mark::First)));
        assert_eq!(board.get(Cell::new(0, 0)), Ok(Square::Empty));
    }

    #[test]
    fn test_place_on_occupied_leaves_board_unchanged() {
        let mut board = Board::new(3).unwrap();
        board.place(Cell::new(1, 1), Mark::First).unwrap();
        let before = board.clone();

        let err = board.place(Cell::new(1, 1), Mark::Second).unwrap_err();
        assert_eq!(err, GameError::CellOccupied { row: 1, col: 1 });
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(
            board.place(Cell::new(3, 0), Mark::First),
            Err(GameError::OutOfBounds { row: 3, col: 0, size: 3 })
        );
        assert!(matches!(
            board.get(Cell::new(0, 7)),
            Err(GameError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3).unwrap();
        for cell in board.cells().collect::<Vec<_>>() {
            assert!(!board.is_full());
            board.place(cell, Mark::First).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_reset_clears_grid() {
        let mut board = Board::new(3).unwrap();
        board.place(Cell::new(0, 0), Mark::Second).unwrap();
        board.reset(5).unwrap();
        assert_eq!(board.size(), 5);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_corners_and_center() {
        let board = Board::new(4).unwrap();
        assert_eq!(
            board.corners(),
            [Cell::new(0, 0), Cell::new(0, 3), Cell::new(3, 3), Cell::new(3, 0)]
        );
        assert_eq!(board.center(), None);
        assert_eq!(Board::new(3).unwrap().center(), Some(Cell::new(1, 1)));
    }

    #[test]
    fn test_render() {
        let mut board = Board::new(3).unwrap();
        board.place(Cell::new(0, 0), Mark::First).unwrap();
        board.place(Cell::new(1, 1), Mark::Second).unwrap();
        let text = board.render(&SymbolPair::default());
        assert_eq!(text, "X|.|.\n.|O|.\n.|.|.");
    }
}
