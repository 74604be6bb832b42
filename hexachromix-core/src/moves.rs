//! Move generation
//!
//! Each player has a transition table mapping a cell's current value to the
//! value it takes when that player plays there. For player `c`:
//!
//! | current                    | becomes             |
//! |----------------------------|---------------------|
//! | empty                      | pure `c`            |
//! | bridge centered on `c`     | pure `c`            |
//! | pure color two steps back  | bridge with `c`     |
//! | pure color two steps ahead | bridge with `c`     |
//!
//! Anything else is not playable for that player.

use crate::board::{Board, CELL_COUNT};
use crate::color::{Cell, Color, COLOR_COUNT};
use serde::{Deserialize, Serialize};

/// Number of distinct cell bit patterns
const CELL_PATTERNS: usize = 1 << 6;

type TransitionTable = [[Option<Cell>; CELL_PATTERNS]; COLOR_COUNT];

static TRANSITIONS: TransitionTable = build_transitions();

const fn build_transitions() -> TransitionTable {
    let mut table = [[None; CELL_PATTERNS]; COLOR_COUNT];
    let mut p = 0;
    while p < COLOR_COUNT {
        let c = Color::from_index(p);
        let own = Cell::pure(c);
        table[p][Cell::EMPTY.bits() as usize] = Some(own);
        table[p][Cell::bridge(c).bits() as usize] = Some(own);
        table[p][Cell::pure(c.offset(4)).bits() as usize] = Some(Cell::bridge(c.previous()));
        table[p][Cell::pure(c.offset(2)).bits() as usize] = Some(Cell::bridge(c.next()));
        p += 1;
    }
    table
}

/// Value `cell` becomes when `player` plays it, or `None` if it is not playable
pub fn transition(player: Color, cell: Cell) -> Option<Cell> {
    TRANSITIONS[player.index()][cell.bits() as usize]
}

// ============================================================================
// MOVE
// ============================================================================

/// A move: the absolute value written to one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub index: u8,
    pub cell: Cell,
}

impl Move {
    pub const fn new(index: u8, cell: Cell) -> Self {
        Self { index, cell }
    }
}

/// All moves for `player`, in ascending cell order
///
/// An empty result means the position is stalemated.
pub fn legal_moves(board: Board, player: Color) -> Vec<Move> {
    let table = &TRANSITIONS[player.index()];
    (0..CELL_COUNT)
        .filter_map(|i| {
            table[board.get(i).bits() as usize].map(|next| Move::new(i as u8, next))
        })
        .collect()
}

/// Does `player` have at least one playable cell?
pub fn has_legal_move(board: Board, player: Color) -> bool {
    let table = &TRANSITIONS[player.index()];
    (0..CELL_COUNT).any(|i| table[board.get(i).bits() as usize].is_some())
}

/// Is `mv` exactly what the transition table produces for `player` on `board`?
pub fn is_legal(board: Board, player: Color, mv: Move) -> bool {
    let index = mv.index as usize;
    index < CELL_COUNT && transition(player, board.get(index)) == Some(mv.cell)
}
