//! Game-state contract for pluggable search
//!
//! A search algorithm only needs to enumerate moves, apply them, detect the
//! end of the game, read the terminal reward and know which team is to move
//! and which just moved. Moves and teams are opaque tokens to the search.

use crate::game::{GameState, MoveError};
use crate::moves::Move;
use crate::variant::Team;
use std::fmt::Debug;
use std::hash::Hash;

/// Capabilities a tree search needs from a game position
///
/// Implementations must be immutable values: `make_move` returns a new state
/// and never changes the receiver, so states can be shared across threads.
pub trait SearchState: Clone + Send + Sync + Sized {
    /// Opaque move token, stored as a tree edge
    type Move: Copy + Eq + Hash + Debug + Send + Sync;

    /// Team identifier used to attribute rewards
    type Team: Copy + Eq + Debug + Send + Sync;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Every legal move; empty only in terminal states
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Successor state; moves not returned by `legal_moves` are rejected
    fn make_move(&self, mv: Self::Move) -> Result<Self, Self::Error>;

    fn is_terminal(&self) -> bool;

    /// Reward for the team that just moved; `None` unless terminal
    fn reward(&self) -> Option<f64>;

    fn current_team(&self) -> Self::Team;

    fn previous_team(&self) -> Self::Team;
}

impl SearchState for GameState {
    type Move = Move;
    type Team = Team;
    type Error = MoveError;

    fn legal_moves(&self) -> Vec<Move> {
        GameState::legal_moves(self)
    }

    fn make_move(&self, mv: Move) -> Result<Self, MoveError> {
        GameState::make_move(self, mv)
    }

    fn is_terminal(&self) -> bool {
        GameState::is_terminal(self)
    }

    fn reward(&self) -> Option<f64> {
        GameState::reward(self)
    }

    fn current_team(&self) -> Team {
        GameState::current_team(self)
    }

    fn previous_team(&self) -> Team {
        GameState::previous_team(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::variant::Variant;

    /// Walks the first legal move through the generic contract only
    fn first_move_line<S: SearchState>(state: &S, plies: usize) -> S {
        let mut current = state.clone();
        for _ in 0..plies {
            let mv = current.legal_moves()[0];
            current = current.make_move(mv).unwrap();
        }
        current
    }

    #[test]
    fn test_generic_first_move_line() {
        let start = GameState::initial(Color::Red, Variant::Solo);
        let end = first_move_line(&start, 8);
        assert_eq!(end.hfen(), "Ygm/M3/5/4/3 G R");
        assert!(!SearchState::is_terminal(&end));
        assert_eq!(SearchState::reward(&end), None);
    }

    #[test]
    fn test_generic_teams() {
        let state = GameState::initial(Color::Cyan, Variant::Mry);
        assert_eq!(SearchState::current_team(&state).to_string(), "GCB");
        assert_eq!(SearchState::previous_team(&state).to_string(), "GCB");
    }

    #[test]
    fn test_states_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GameState>();
        assert_send_sync::<Move>();
    }
}
