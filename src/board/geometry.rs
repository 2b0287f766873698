//! Board geometry: square numbers to grid cells and back.
//!
//! Squares follow a boustrophedon path. Square 1 is the bottom-left cell;
//! rows counted from the bottom run left-to-right when even and
//! right-to-left when odd. Row 0 is the top of the grid.
//!
//! ```
//! use snakes_ladders::board::{coordinates_to_square, square_to_coordinates, Cell};
//!
//! assert_eq!(square_to_coordinates(1), Cell::new(9, 0));
//! assert_eq!(square_to_coordinates(11), Cell::new(8, 9));
//! assert_eq!(coordinates_to_square(0, 9), 91);
//! assert_eq!(coordinates_to_square(0, 0), 100);
//! ```

use serde::{Deserialize, Serialize};

use super::layout::CLASSIC_SIZE;

/// A grid cell. Row 0 is the top row, column 0 the left column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Maps between square numbers and cells on a `size` x `size` grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardGeometry {
    size: usize,
}

impl BoardGeometry {
    /// Geometry of the classic 10x10 board.
    pub const CLASSIC: BoardGeometry = BoardGeometry { size: CLASSIC_SIZE };

    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn square_count(self) -> u32 {
        (self.size * self.size) as u32
    }

    /// Rows counted from the bottom that run right-to-left.
    const fn is_reversed(self, row: usize) -> bool {
        (self.size - 1 - row) % 2 == 1
    }

    /// Cell holding `square`. Callers must pass `1..=square_count`.
    #[must_use]
    pub fn square_to_coordinates(self, square: u32) -> Cell {
        debug_assert!(
            (1..=self.square_count()).contains(&square),
            "square {square} is off the board"
        );

        let n = (square - 1) as usize;
        let row = self.size - 1 - n / self.size;
        let mut col = n % self.size;
        if self.is_reversed(row) {
            col = self.size - 1 - col;
        }
        Cell { row, col }
    }

    /// Square numbered at `cell`. Callers must pass an on-grid cell.
    #[must_use]
    pub fn coordinates_to_square(self, cell: Cell) -> u32 {
        debug_assert!(
            cell.row < self.size && cell.col < self.size,
            "cell {cell:?} is off the board"
        );

        let base = (self.size - 1 - cell.row) * self.size;
        let col = if self.is_reversed(cell.row) {
            self.size - 1 - cell.col
        } else {
            cell.col
        };
        (base + col + 1) as u32
    }

    /// Every cell with its square, row by row from the top-left.
    pub fn cells(self) -> impl Iterator<Item = (Cell, u32)> {
        (0..self.size).flat_map(move |row| {
            (0..self.size).map(move |col| {
                let cell = Cell { row, col };
                (cell, self.coordinates_to_square(cell))
            })
        })
    }
}

/// Cell holding `square` on the classic board.
#[must_use]
pub fn square_to_coordinates(square: u32) -> Cell {
    BoardGeometry::CLASSIC.square_to_coordinates(square)
}

/// Square at (`row`, `col`) on the classic board.
#[must_use]
pub fn coordinates_to_square(row: usize, col: usize) -> u32 {
    BoardGeometry::CLASSIC.coordinates_to_square(Cell { row, col })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_corners() {
        assert_eq!(square_to_coordinates(1), Cell::new(9, 0));
        assert_eq!(square_to_coordinates(10), Cell::new(9, 9));
        assert_eq!(square_to_coordinates(91), Cell::new(0, 9));
        assert_eq!(square_to_coordinates(100), Cell::new(0, 0));
    }

    #[test]
    fn test_zig_zag() {
        // Second row from the bottom runs right-to-left.
        assert_eq!(square_to_coordinates(11), Cell::new(8, 9));
        assert_eq!(square_to_coordinates(20), Cell::new(8, 0));
        assert_eq!(square_to_coordinates(21), Cell::new(7, 0));
    }

    #[test]
    fn test_inverse_on_classic_board() {
        assert_eq!(coordinates_to_square(9, 0), 1);
        assert_eq!(coordinates_to_square(8, 9), 11);
        assert_eq!(coordinates_to_square(0, 9), 91);
        assert_eq!(coordinates_to_square(0, 0), 100);
    }

    #[test]
    fn test_odd_size_board() {
        let geometry = BoardGeometry::new(3);
        assert_eq!(geometry.square_to_coordinates(1), Cell::new(2, 0));
        assert_eq!(geometry.square_to_coordinates(4), Cell::new(1, 2));
        assert_eq!(geometry.square_to_coordinates(9), Cell::new(0, 2));
    }

    #[test]
    fn test_cells_cover_every_square_once() {
        let mut squares: Vec<u32> = BoardGeometry::CLASSIC.cells().map(|(_, s)| s).collect();
        assert_eq!(squares.len(), 100);
        assert_eq!(squares[0], 100);

        squares.sort_unstable();
        assert_eq!(squares, (1..=100).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn prop_square_round_trip(square in 1u32..=100) {
            let cell = square_to_coordinates(square);
            prop_assert!(cell.row < 10 && cell.col < 10);
            prop_assert_eq!(coordinates_to_square(cell.row, cell.col), square);
        }

        #[test]
        fn prop_cell_round_trip(row in 0usize..10, col in 0usize..10) {
            let square = coordinates_to_square(row, col);
            prop_assert_eq!(square_to_coordinates(square), Cell::new(row, col));
        }

        #[test]
        fn prop_any_size_round_trip(size in 1usize..=16, offset in 0u32..256) {
            let geometry = BoardGeometry::new(size);
            let square = offset % geometry.square_count() + 1;
            let cell = geometry.square_to_coordinates(square);
            prop_assert_eq!(geometry.coordinates_to_square(cell), square);
        }
    }
}
