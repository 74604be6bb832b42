//! Game state and move application

use crate::board::{Board, CELL_COUNT};
use crate::color::{Cell, Color};
use crate::hfen::{self, HfenError};
use crate::moves::{self, Move};
use crate::path;
use crate::variant::{Team, Variant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Game result, judged for the player who just moved
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    /// The given color joined its two edges
    Connected(Color),
    /// The player to move has nowhere to play
    Stalemate,
}

/// Reward magnitudes handed to the search at terminal states
///
/// Only the ordering matters: a win must be worth more than a stalemate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardPolicy {
    pub win: f64,
    pub stalemate: f64,
}

impl RewardPolicy {
    pub fn is_valid(&self) -> bool {
        self.win > self.stalemate
    }
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self {
            win: 1.0,
            stalemate: -0.5,  // slight penalty for the player who caused it
        }
    }
}

/// Rejected move application
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell index {0} out of range")]
    OutOfRange(u8),

    #[error("{player:?} cannot play cell {index} as {cell:?}")]
    Illegal { player: Color, index: u8, cell: Cell },
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Immutable position: board, player to move and variant
///
/// Every move returns a fresh state, so states can be shared freely between
/// threads and search-tree nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameState {
    board: Board,
    player: Color,
    variant: Variant,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    pub fn new(board: Board, player: Color, variant: Variant) -> Self {
        Self {
            board,
            player,
            variant,
        }
    }

    /// Empty board
    pub fn initial(player: Color, variant: Variant) -> Self {
        Self::new(Board::EMPTY, player, variant)
    }

    pub fn from_hfen(text: &str) -> Result<Self, HfenError> {
        hfen::parse(text)
    }

    pub fn hfen(&self) -> String {
        hfen::render(self)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> Board {
        self.board
    }

    /// Color to move
    pub fn player(&self) -> Color {
        self.player
    }

    /// Color that made the last move
    pub fn previous_player(&self) -> Color {
        self.player.previous()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Team of the color to move
    pub fn current_team(&self) -> Team {
        self.variant.team(self.player)
    }

    /// Team of the color that just moved
    pub fn previous_team(&self) -> Team {
        self.variant.team(self.previous_player())
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Moves for the player to move, in ascending cell order
    pub fn legal_moves(&self) -> Vec<Move> {
        moves::legal_moves(self.board, self.player)
    }

    pub fn has_legal_move(&self) -> bool {
        moves::has_legal_move(self.board, self.player)
    }

    /// Apply a move, returning the next state
    ///
    /// The move must be one `legal_moves` would return; anything else is
    /// rejected.
    pub fn make_move(&self, mv: Move) -> Result<Self, MoveError> {
        if mv.index as usize >= CELL_COUNT {
            tracing::debug!("Rejected move at cell {} in {}", mv.index, self);
            return Err(MoveError::OutOfRange(mv.index));
        }
        if !moves::is_legal(self.board, self.player, mv) {
            tracing::debug!("Rejected illegal move {:?} in {}", mv, self);
            return Err(MoveError::Illegal {
                player: self.player,
                index: mv.index,
                cell: mv.cell,
            });
        }
        Ok(self.apply(mv))
    }

    /// Every legal move paired with the state it produces
    pub fn successors(&self) -> Vec<(Move, GameState)> {
        self.legal_moves()
            .into_iter()
            .map(|mv| (mv, self.apply(mv)))
            .collect()
    }

    fn apply(&self, mv: Move) -> Self {
        Self {
            board: self.board.set(mv.index as usize, mv.cell),
            player: self.player.next(),
            variant: self.variant,
        }
    }

    // ========================================================================
    // OUTCOME
    // ========================================================================

    /// Did the player who just moved connect their edges?
    ///
    /// A move can only extend the mover's own chains, so this is the only
    /// path that can have been completed.
    pub fn has_path(&self) -> bool {
        path::has_path(self.board, self.previous_player())
    }

    pub fn has_path_for(&self, color: Color) -> bool {
        path::has_path(self.board, color)
    }

    pub fn result(&self) -> GameResult {
        if self.has_path() {
            GameResult::Connected(self.previous_player())
        } else if !self.has_legal_move() {
            GameResult::Stalemate
        } else {
            GameResult::Ongoing
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self.result() {
            GameResult::Connected(color) => Some(color),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.has_path() || !self.has_legal_move()
    }

    /// Reward for the team that just moved; `None` while the game is ongoing
    pub fn reward(&self) -> Option<f64> {
        self.reward_with(&RewardPolicy::default())
    }

    pub fn reward_with(&self, policy: &RewardPolicy) -> Option<f64> {
        match self.result() {
            GameResult::Connected(_) => Some(policy.win),
            GameResult::Stalemate => Some(policy.stalemate),
            GameResult::Ongoing => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial(Color::Red, Variant::Mry)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hfen())
    }
}

impl FromStr for GameState {
    type Err = HfenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hfen::parse(s)
    }
}

impl TryFrom<String> for GameState {
    type Error = HfenError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        hfen::parse(&s)
    }
}

impl From<GameState> for String {
    fn from(state: GameState) -> String {
        state.hfen()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn state(hfen: &str) -> GameState {
        hfen.parse().unwrap()
    }

    #[test]
    fn test_game_creation() {
        let game = GameState::default();
        assert_eq!(game.player(), Color::Red);
        assert_eq!(game.previous_player(), Color::Magenta);
        assert_eq!(game.variant(), Variant::Mry);
        assert_eq!(game.hfen(), "3/4/5/4/3 R MRY");
        assert_eq!(game.result(), GameResult::Ongoing);
    }

    #[test]
    fn test_legal_move_counts() {
        let cases = [
            ("3/4/5/4/3 R MRY", 19),
            ("R2/4/5/4/3 Y MRY", 18),
            ("RY1/4/5/4/3 G MRY", 18),
            ("yY1/4/5/4/3 C MRY", 18),
            ("yg1/4/5/4/3 B MRY", 17),
            ("ygB/4/5/4/3 M MRY", 16),
            ("ygB/M3/5/4/3 R MRY", 16),
            ("ygm/M3/5/4/3 Y MRY", 17),
            ("Ygm/M3/5/4/3 G MRY", 16),
        ];
        for (hfen, count) in cases {
            assert_eq!(state(hfen).legal_moves().len(), count, "{}", hfen);
        }
    }

    #[test]
    fn test_make_move_advances() {
        let game = GameState::default();
        let mv = game.legal_moves()[0];
        let next = game.make_move(mv).unwrap();

        assert_eq!(next.hfen(), "R2/4/5/4/3 Y MRY");
        assert_eq!(next.previous_player(), Color::Red);
        // Receiver untouched
        assert_eq!(game.hfen(), "3/4/5/4/3 R MRY");
    }

    #[test]
    fn test_rejects_illegal_moves() {
        let game = state("R2/4/5/4/3 Y MRY");

        // Cell 0 is red; yellow cannot touch it
        let err = game.make_move(Move::new(0, Cell::pure(Color::Yellow))).unwrap_err();
        assert_eq!(
            err,
            MoveError::Illegal { player: Color::Yellow, index: 0, cell: Cell::pure(Color::Yellow) }
        );

        // Wrong resulting value on a playable cell
        assert!(game.make_move(Move::new(1, Cell::pure(Color::Red))).is_err());

        assert_eq!(
            game.make_move(Move::new(40, Cell::pure(Color::Yellow))),
            Err(MoveError::OutOfRange(40))
        );
    }

    #[test]
    fn test_successors_match_make_move() {
        let game = state("ygB/M3/5/4/3 R MRY");
        for (mv, next) in game.successors() {
            assert_eq!(game.make_move(mv), Ok(next));
        }
    }

    #[test]
    fn test_teams() {
        let game = state("3/4/5/4/3 G MR");
        assert_eq!(game.current_team().to_string(), "YG");
        assert_eq!(game.previous_team().to_string(), "YG");
        let game = state("3/4/5/4/3 R MR");
        assert_eq!(game.previous_team().to_string(), "MR");
    }

    #[test]
    fn test_terminal_positions() {
        for hfen in [
            "R2/R3/m4/R3/y2 Y MRY",
            "3/4/yGcyG/4/3 C MR",
            "3/4/Bcmmm/4/3 M MR",
            "1bR/Yb1y/mYCrM/Bygy/YC1 B MRY",
            "RRR/RRRR/RRRRR/RRRR/RRR Y MRY",
        ] {
            assert!(state(hfen).is_terminal(), "{}", hfen);
        }
    }

    #[test]
    fn test_non_terminal_positions() {
        for hfen in [
            "3/4/5/4/3 R MRY",
            "3/4/5/4/3 R MR",
            "GC1/BMRC/2R1c/MMYY/1BY C MRY",
            "R2/R3/m4/R3/y2 R MRY",
        ] {
            assert!(!state(hfen).is_terminal(), "{}", hfen);
        }
    }

    #[test]
    fn test_win_and_stalemate() {
        let win = state("RRR/RRRR/RRRRR/RRRR/RRR Y MRY");
        assert!(win.has_path());
        assert_eq!(win.result(), GameResult::Connected(Color::Red));
        assert_eq!(win.winner(), Some(Color::Red));

        let cat = state("RRR/RRRR/RRRRR/RRRR/RRR R MRY");
        assert!(!cat.has_path());
        assert!(cat.has_path_for(Color::Red));
        assert_eq!(cat.result(), GameResult::Stalemate);
        assert_eq!(cat.winner(), None);

        assert!(win.reward().unwrap() > cat.reward().unwrap());
        assert_eq!(GameState::default().reward(), None);
    }

    #[test]
    fn test_reward_policy() {
        let policy = RewardPolicy { win: 10.0, stalemate: 0.0 };
        assert!(policy.is_valid());
        assert!(!RewardPolicy { win: 0.0, stalemate: 0.0 }.is_valid());

        let cat = state("RRR/RRRR/RRRRR/RRRR/RRR R MRY");
        assert_eq!(cat.reward_with(&policy), Some(0.0));
        assert_eq!(cat.reward(), Some(-0.5));
    }

    #[test]
    fn test_serde_as_hfen() {
        let game = state("GC1/BMRC/2R1c/MMYY/1BY C MRY");
        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(json, "\"GC1/BMRC/2R1c/MMYY/1BY C MRY\"");
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);

        assert!(serde_json::from_str::<GameState>("\"3/4/5/4 R MRY\"").is_err());
    }
}
