//! Hex adjacency and winning edges
//!
//! ```text
//!          R R R
//!      M  0  1  2  Y
//!    M  3  4  5  6  Y
//!     7  8  9  10 11
//!    B  12 13 14 15 G
//!      B  16 17 18  G
//!          C C C
//! ```
//!
//! Each color joins its own side of the hexagon to the opposite side, so
//! opposite colors (R/C, Y/B, G/M) share the same pair of edges.

use crate::board::CELL_COUNT;
use crate::color::{Color, COLOR_COUNT};

/// Neighbors of every cell
pub static NEIGHBORS: [&[u8]; CELL_COUNT] = [
    &[1, 3, 4],
    &[0, 2, 4, 5],
    &[1, 5, 6],
    &[0, 4, 7, 8],
    &[0, 1, 3, 5, 8, 9],
    &[1, 2, 4, 6, 9, 10],
    &[2, 5, 10, 11],
    &[3, 8, 12],
    &[3, 4, 7, 9, 12, 13],
    &[4, 5, 8, 10, 13, 14],
    &[5, 6, 9, 11, 14, 15],
    &[6, 10, 15],
    &[7, 8, 13, 16],
    &[8, 9, 12, 14, 16, 17],
    &[9, 10, 13, 15, 17, 18],
    &[10, 11, 14, 18],
    &[12, 13, 17],
    &[13, 14, 16, 18],
    &[14, 15, 17],
];

const TOP: [u8; 3] = [0, 1, 2];
const BOTTOM: [u8; 3] = [16, 17, 18];
const UPPER_RIGHT: [u8; 3] = [2, 6, 11];
const LOWER_LEFT: [u8; 3] = [7, 12, 16];
const LOWER_RIGHT: [u8; 3] = [11, 15, 18];
const UPPER_LEFT: [u8; 3] = [0, 3, 7];

/// The two board edges a color must connect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgePair {
    pub start: &'static [u8],
    pub end: &'static [u8],
    /// Bitmask of `end`, indexed by cell
    pub end_mask: u32,
}

impl EdgePair {
    pub const fn new(start: &'static [u8], end: &'static [u8]) -> Self {
        Self {
            start,
            end,
            end_mask: cell_mask(end),
        }
    }

    pub const fn is_end(&self, cell: usize) -> bool {
        self.end_mask & (1u32 << cell) != 0
    }
}

/// Edge pairs indexed by color
pub static EDGES: [EdgePair; COLOR_COUNT] = [
    EdgePair::new(&TOP, &BOTTOM),              // R
    EdgePair::new(&UPPER_RIGHT, &LOWER_LEFT),  // Y
    EdgePair::new(&LOWER_RIGHT, &UPPER_LEFT),  // G
    EdgePair::new(&TOP, &BOTTOM),              // C
    EdgePair::new(&UPPER_RIGHT, &LOWER_LEFT),  // B
    EdgePair::new(&LOWER_RIGHT, &UPPER_LEFT),  // M
];

/// Edges `color` must join to win
pub fn edges(color: Color) -> &'static EdgePair {
    &EDGES[color.index()]
}

/// Neighbors of `cell`
pub fn neighbors(cell: usize) -> &'static [u8] {
    NEIGHBORS[cell]
}

const fn cell_mask(cells: &[u8]) -> u32 {
    let mut mask: u32 = 0;
    let mut i = 0;
    while i < cells.len() {
        mask |= 1u32 << cells[i];
        i += 1;
    }
    mask
}
