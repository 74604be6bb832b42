//! Colors and cell color-sets
//!
//! The six colors sit on a fixed rotation R -> Y -> G -> C -> B -> M -> R.
//! A cell holds zero, one or two of them:
//!
//! - empty: no color
//! - pure: a single color
//! - bridge: two colors two steps apart on the rotation, named after the
//!   color between them (`y` = R+G, `c` = G+B, `m` = B+R, `r` = M+Y, ...)

use serde::{Deserialize, Serialize};

/// Number of colors (and players)
pub const COLOR_COUNT: usize = 6;

/// Color letters in rotation order
pub const COLOR_LETTERS: [char; COLOR_COUNT] = ['R', 'Y', 'G', 'C', 'B', 'M'];

// ============================================================================
// COLOR
// ============================================================================

/// One of the six player colors, in rotation order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "R")]
    Red = 0,
    #[serde(rename = "Y")]
    Yellow = 1,
    #[serde(rename = "G")]
    Green = 2,
    #[serde(rename = "C")]
    Cyan = 3,
    #[serde(rename = "B")]
    Blue = 4,
    #[serde(rename = "M")]
    Magenta = 5,
}

impl Color {
    /// All colors in rotation order
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Cyan,
        Color::Blue,
        Color::Magenta,
    ];

    /// Position in the rotation (0-5)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color at rotation index, wrapping
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % COLOR_COUNT]
    }

    /// Color `steps` positions further along the rotation
    pub const fn offset(self, steps: usize) -> Self {
        Self::from_index(self.index() + steps)
    }

    /// Next color to move
    pub const fn next(self) -> Self {
        self.offset(1)
    }

    /// Color that moved before this one
    pub const fn previous(self) -> Self {
        self.offset(COLOR_COUNT - 1)
    }

    /// Single-bit mask for this color
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Uppercase HFEN letter
    pub const fn letter(self) -> char {
        COLOR_LETTERS[self.index()]
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        COLOR_LETTERS
            .iter()
            .position(|&c| c == letter)
            .map(Self::from_index)
    }
}

// ============================================================================
// CELL
// ============================================================================

/// Color-set occupying one board cell (one bit per color)
///
/// Only 13 of the 64 bit patterns are reachable: empty, six pure colors and
/// six bridges. Constructors never produce anything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Cell(u8);

impl Cell {
    pub const EMPTY: Cell = Cell(0);

    /// Mask of all six color bits
    pub const MASK: u8 = 0b11_1111;

    /// Cell claimed by a single color
    pub const fn pure(color: Color) -> Self {
        Cell(color.bit())
    }

    /// Bridge centered on `center`: held jointly by the colors either side of it
    pub const fn bridge(center: Color) -> Self {
        Cell(center.previous().bit() | center.next().bit())
    }

    /// Raw color bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Wrap bits already known to satisfy the cell invariant
    pub(crate) const fn from_raw(bits: u8) -> Self {
        Cell(bits)
    }

    /// Validate a raw bit pattern against the cell invariant
    pub fn from_bits(bits: u8) -> Option<Self> {
        if bits == 0 {
            return Some(Cell::EMPTY);
        }
        Color::ALL.into_iter().find_map(|c| {
            if bits == c.bit() {
                Some(Cell::pure(c))
            } else if bits == Cell::bridge(c).0 {
                Some(Cell::bridge(c))
            } else {
                None
            }
        })
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_bridge(self) -> bool {
        self.0.count_ones() == 2
    }

    /// Number of colors holding this cell (0, 1 or 2)
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Does `color` hold this cell, purely or through a bridge?
    pub const fn contains(self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    /// Colors holding this cell, in rotation order
    pub fn colors(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |&c| self.contains(c))
    }
}

impl TryFrom<u8> for Cell {
    type Error = String;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Cell::from_bits(bits).ok_or_else(|| format!("invalid cell bits: {:#08b}", bits))
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.0
    }
}
