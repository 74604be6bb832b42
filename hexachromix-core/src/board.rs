//! Packed board encoding
//!
//! The 19 cells are stored in a single `u128`, 6 bits per cell (one bit per
//! color), cell 0 in the lowest bits. Cell indices follow the row layout:
//!
//! ```text
//!       0  1  2
//!     3  4  5  6
//!   7  8  9  10 11
//!     12 13 14 15
//!       16 17 18
//! ```

use crate::color::{Cell, Color};

/// Number of cells on the board
pub const CELL_COUNT: usize = 19;

/// Bits used per cell
pub const BITS_PER_CELL: u32 = 6;

/// Cells per row, top to bottom
pub const ROW_WIDTHS: [usize; 5] = [3, 4, 5, 4, 3];

/// Index of the first cell of each row
pub const ROW_STARTS: [usize; 5] = [0, 3, 7, 12, 16];

const CELL_MASK: u128 = Cell::MASK as u128;

/// Board position packed into a fixed-width integer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board(u128);

impl Board {
    /// Board with every cell empty
    pub const EMPTY: Board = Board(0);

    /// Raw packed value
    pub const fn bits(self) -> u128 {
        self.0
    }

    /// Cell value at `index`
    ///
    /// # Panics
    /// If `index >= CELL_COUNT`.
    pub fn get(self, index: usize) -> Cell {
        assert!(index < CELL_COUNT, "cell index {} out of range", index);
        let bits = (self.0 >> (index as u32 * BITS_PER_CELL)) & CELL_MASK;
        // Only ever written through `set`, which takes a valid Cell
        Cell::from_raw(bits as u8)
    }

    /// Copy of this board with `index` set to `cell`; every other cell is unchanged
    ///
    /// # Panics
    /// If `index >= CELL_COUNT`.
    pub fn set(self, index: usize, cell: Cell) -> Board {
        assert!(index < CELL_COUNT, "cell index {} out of range", index);
        let shift = index as u32 * BITS_PER_CELL;
        let cleared = self.0 & !(CELL_MASK << shift);
        Board(cleared | ((cell.bits() as u128) << shift))
    }

    /// Build from cell values in index order
    pub fn from_cells(cells: &[Cell; CELL_COUNT]) -> Board {
        cells
            .iter()
            .enumerate()
            .fold(Board::EMPTY, |board, (i, &cell)| board.set(i, cell))
    }

    /// Unpack into cell values in index order
    pub fn cells(self) -> [Cell; CELL_COUNT] {
        std::array::from_fn(|i| self.get(i))
    }

    /// Board with every cell claimed purely by `color`
    pub fn filled(color: Color) -> Board {
        Board::from_cells(&[Cell::pure(color); CELL_COUNT])
    }

    /// Number of empty cells
    pub fn empty_count(self) -> usize {
        (0..CELL_COUNT).filter(|&i| self.get(i).is_empty()).count()
    }
}
