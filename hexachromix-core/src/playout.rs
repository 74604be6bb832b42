//! Random playouts and move-tree counting
//!
//! Both work through [`SearchState`] only, so they double as a check that a
//! game honours the search contract.

use crate::search::SearchState;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// PLAYOUT RESULT
// ============================================================================

/// Outcome of one random playout
#[derive(Clone, Debug)]
pub struct Playout<S: SearchState> {
    /// Terminal state reached
    pub final_state: S,
    /// Number of moves played
    pub moves_played: u32,
}

impl<S: SearchState> Playout<S> {
    /// Terminal reward, credited to `scoring_team`
    pub fn reward(&self) -> Option<f64> {
        self.final_state.reward()
    }

    /// Team that made the final move
    pub fn scoring_team(&self) -> S::Team {
        self.final_state.previous_team()
    }
}

// ============================================================================
// RANDOM PLAYOUT
// ============================================================================

/// Play uniformly random legal moves until the game ends
pub fn random_playout<S: SearchState, R: Rng>(
    state: &S,
    rng: &mut R,
) -> Result<Playout<S>, S::Error> {
    let mut current = state.clone();
    let mut moves_played = 0;

    while !current.is_terminal() {
        let legal_moves = current.legal_moves();
        if legal_moves.is_empty() {
            break;
        }

        let mv = legal_moves[rng.gen_range(0..legal_moves.len())];
        current = current.make_move(mv)?;
        moves_played += 1;
    }

    tracing::trace!(
        "Playout finished after {} moves, team {:?} scored {:?}",
        moves_played,
        current.previous_team(),
        current.reward()
    );

    Ok(Playout {
        final_state: current,
        moves_played,
    })
}

/// Random playout with a reproducible seed
pub fn seeded_playout<S: SearchState>(state: &S, seed: u64) -> Result<Playout<S>, S::Error> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_playout(state, &mut rng)
}

/// Independent playouts from many states in parallel
///
/// Playout `i` is seeded with `seed + i`, so results do not depend on
/// scheduling.
#[cfg(feature = "parallel")]
pub fn parallel_playouts<S: SearchState>(
    states: &[S],
    seed: u64,
) -> Result<Vec<Playout<S>>, S::Error> {
    use rayon::prelude::*;

    states
        .par_iter()
        .enumerate()
        .map(|(i, state)| seeded_playout(state, seed.wrapping_add(i as u64)))
        .collect()
}

// ============================================================================
// PERFT
// ============================================================================

/// Count move sequences of length `depth`
///
/// Terminal positions reached early count as a single leaf.
pub fn perft<S: SearchState>(state: &S, depth: u32) -> Result<u64, S::Error> {
    if depth == 0 || state.is_terminal() {
        return Ok(1);
    }

    let mut nodes = 0;
    for mv in state.legal_moves() {
        nodes += perft(&state.make_move(mv)?, depth - 1)?;
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CELL_COUNT;
    use crate::color::Color;
    use crate::game::{GameResult, GameState};
    use crate::variant::Variant;

    #[test]
    fn test_playout_reaches_terminal() {
        let start = GameState::default();
        for seed in 0..20 {
            let playout = seeded_playout(&start, seed).unwrap();
            assert!(playout.final_state.is_terminal());
            assert!(playout.reward().is_some());
            // Empty cells are always playable, so a stalemate needs a full board
            assert!(playout.moves_played as usize >= CELL_COUNT);
            if let GameResult::Connected(_) = playout.final_state.result() {
                // Five cells of its own, a full rotation between each
                assert!(playout.moves_played >= 25, "won after {}", playout.moves_played);
            }
        }
    }

    #[test]
    fn test_playout_is_reproducible() {
        let start = GameState::initial(Color::Green, Variant::Mr);
        let a = seeded_playout(&start, 42).unwrap();
        let b = seeded_playout(&start, 42).unwrap();
        assert_eq!(a.final_state, b.final_state);
        assert_eq!(a.moves_played, b.moves_played);
    }

    #[test]
    fn test_playout_from_terminal() {
        let won: GameState = "RRR/RRRR/RRRRR/RRRR/RRR Y MRY".parse().unwrap();
        let playout = seeded_playout(&won, 7).unwrap();
        assert_eq!(playout.moves_played, 0);
        assert_eq!(playout.final_state, won);
        assert_eq!(playout.scoring_team().to_string(), "MRY");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_playouts_match_sequential() {
        let states: Vec<GameState> = Color::ALL
            .into_iter()
            .zip(Variant::ALL.into_iter().cycle())
            .map(|(color, variant)| GameState::initial(color, variant))
            .collect();

        let first = parallel_playouts(&states, 100).unwrap();
        let second = parallel_playouts(&states, 100).unwrap();
        assert_eq!(first.len(), states.len());

        for (i, state) in states.iter().enumerate() {
            let sequential = seeded_playout(state, 100 + i as u64).unwrap();
            assert_eq!(first[i].final_state, sequential.final_state);
            assert_eq!(first[i].moves_played, sequential.moves_played);
            assert_eq!(second[i].final_state, sequential.final_state);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_playouts_seed_wraps() {
        let states = [GameState::default(), GameState::default()];
        let playouts = parallel_playouts(&states, u64::MAX).unwrap();
        let last = seeded_playout(&states[0], u64::MAX).unwrap();
        let wrapped = seeded_playout(&states[1], 0).unwrap();
        assert_eq!(playouts[0].final_state, last.final_state);
        assert_eq!(playouts[1].final_state, wrapped.final_state);
    }

    #[test]
    fn test_perft_shallow() {
        let start = GameState::default();
        assert_eq!(perft(&start, 0).unwrap(), 1);
        assert_eq!(perft(&start, 1).unwrap(), CELL_COUNT as u64);
        // Yellow can play every cell except the one red took
        assert_eq!(perft(&start, 2).unwrap(), (CELL_COUNT * (CELL_COUNT - 1)) as u64);
    }

    #[test]
    fn test_perft_terminal_is_leaf() {
        let cat: GameState = "RRR/RRRR/RRRRR/RRRR/RRR R MRY".parse().unwrap();
        assert_eq!(perft(&cat, 3).unwrap(), 1);
    }
}
