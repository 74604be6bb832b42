//! HFEN position notation
//!
//! `<row>/<row>/<row>/<row>/<row> <player> <variant>`, e.g. `GC1/BMRC/2R1c/MMYY/1BY C MRY`.
//!
//! - Rows hold 3, 4, 5, 4 and 3 cells, top to bottom.
//! - A digit stands for that many empty cells.
//! - An uppercase letter (`RYGCBM`) is a pure cell.
//! - A lowercase letter is the bridge centered on that color (`y` = R+G).
//! - The player is the uppercase letter of the color to move.
//! - The variant is one of `MRY`, `MR` or `R`.

use crate::board::{Board, ROW_STARTS, ROW_WIDTHS};
use crate::color::{Cell, Color};
use crate::game::GameState;
use crate::variant::Variant;
use thiserror::Error;

/// Malformed HFEN text
///
/// Besides the board, player and field-count errors, an unknown variant
/// token is rejected with [`HfenError::InvalidVariant`] rather than read as
/// a game without teams, so every accepted record renders back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HfenError {
    #[error("expected 3 space-separated fields, found {0}")]
    FieldCount(usize),

    #[error("expected 5 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} holds {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized cell character {0:?}")]
    InvalidCell(char),

    #[error("unrecognized player {0:?}")]
    InvalidPlayer(String),

    #[error("unrecognized variant {0:?}")]
    InvalidVariant(String),
}

// ============================================================================
// CELL ALPHABET
// ============================================================================

/// Letter for a non-empty cell; `None` for empty cells
pub fn cell_char(cell: Cell) -> Option<char> {
    if cell.is_empty() {
        return None;
    }
    Color::ALL.into_iter().find_map(|c| {
        if cell == Cell::pure(c) {
            Some(c.letter())
        } else if cell == Cell::bridge(c) {
            Some(c.letter().to_ascii_lowercase())
        } else {
            None
        }
    })
}

/// Cell for a letter
pub fn char_cell(ch: char) -> Option<Cell> {
    if ch.is_ascii_uppercase() {
        Color::from_letter(ch).map(Cell::pure)
    } else {
        Color::from_letter(ch.to_ascii_uppercase()).map(Cell::bridge)
    }
}

// ============================================================================
// PARSE
// ============================================================================

/// Parse a full HFEN record
pub fn parse(hfen: &str) -> Result<GameState, HfenError> {
    let fields: Vec<&str> = hfen.split(' ').collect();
    let [board, player, variant] = fields[..] else {
        return Err(HfenError::FieldCount(fields.len()));
    };

    let board = parse_board(board)?;
    let player = parse_player(player)?;
    let variant = variant
        .parse::<Variant>()
        .map_err(HfenError::InvalidVariant)?;

    Ok(GameState::new(board, player, variant))
}

/// Parse the board field (`3/4/5/4/3`)
pub fn parse_board(text: &str) -> Result<Board, HfenError> {
    let rows: Vec<&str> = text.split('/').collect();
    if rows.len() != ROW_WIDTHS.len() {
        return Err(HfenError::RowCount(rows.len()));
    }

    let mut board = Board::EMPTY;
    for (row, line) in rows.iter().enumerate() {
        let expected = ROW_WIDTHS[row];
        let mut found = 0;

        for ch in line.chars() {
            match ch.to_digit(10) {
                Some(run) if run > 0 => found += run as usize,
                _ => {
                    let cell = char_cell(ch).ok_or(HfenError::InvalidCell(ch))?;
                    if found < expected {
                        board = board.set(ROW_STARTS[row] + found, cell);
                    }
                    found += 1;
                }
            }
        }

        if found != expected {
            return Err(HfenError::RowWidth {
                row,
                expected,
                found,
            });
        }
    }

    Ok(board)
}

fn parse_player(text: &str) -> Result<Color, HfenError> {
    let mut chars = text.chars();
    let color = match (chars.next(), chars.next()) {
        (Some(ch), None) => Color::from_letter(ch),
        _ => None,
    };
    color.ok_or_else(|| HfenError::InvalidPlayer(text.to_string()))
}

// ============================================================================
// RENDER
// ============================================================================

/// Render a full HFEN record
pub fn render(state: &GameState) -> String {
    format!(
        "{} {} {}",
        render_board(state.board()),
        state.player().letter(),
        state.variant().token()
    )
}

/// Render the board field, collapsing runs of empty cells into digits
pub fn render_board(board: Board) -> String {
    let rows: Vec<String> = ROW_STARTS
        .iter()
        .zip(ROW_WIDTHS.iter())
        .map(|(&start, &width)| render_row(board, start, width))
        .collect();
    rows.join("/")
}

fn render_row(board: Board, start: usize, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut empties = 0;

    for i in start..start + width {
        match cell_char(board.get(i)) {
            Some(ch) => {
                if empties > 0 {
                    out.push_str(&empties.to_string());
                    empties = 0;
                }
                out.push(ch);
            }
            None => empties += 1,
        }
    }
    if empties > 0 {
        out.push_str(&empties.to_string());
    }

    out
}
