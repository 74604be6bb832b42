//! Edge-to-edge connection check

use crate::board::{Board, CELL_COUNT};
use crate::color::Color;
use crate::geometry::{edges, neighbors, EdgePair};

/// Does `color` connect its start edge to its end edge?
///
/// Breadth-first search from every start-edge cell `color` holds, moving only
/// through cells it holds purely or through a bridge. Stops at the first held
/// cell on the end edge.
pub fn has_path(board: Board, color: Color) -> bool {
    connects(board, color, edges(color))
}

/// Does `color` join `edge.start` to `edge.end`?
///
/// A held cell on both edges connects by itself.
pub fn connects(board: Board, color: Color, edge: &EdgePair) -> bool {
    // Each cell enters the queue at most once
    let mut queue = [0u8; CELL_COUNT];
    let mut head = 0;
    let mut tail = 0;
    let mut visited: u32 = 0;

    for &cell in edge.start {
        if board.get(cell as usize).contains(color) {
            visited |= 1u32 << cell;
            queue[tail] = cell;
            tail += 1;
        }
    }

    while head < tail {
        let cell = queue[head] as usize;
        head += 1;

        if edge.is_end(cell) {
            return true;
        }

        for &n in neighbors(cell) {
            if visited & (1u32 << n) == 0 && board.get(n as usize).contains(color) {
                visited |= 1u32 << n;
                queue[tail] = n;
                tail += 1;
            }
        }
    }

    false
}
