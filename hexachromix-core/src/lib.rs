//! Hexachromix Core - Rules engine
//!
//! Six colors take turns claiming cells of a 19-cell hexagonal board, each
//! trying to join its two opposite edges. This crate provides:
//! - Packed board encoding and hex adjacency
//! - Move generation from per-player transition tables
//! - Edge-to-edge path detection
//! - HFEN position notation
//! - Immutable game states behind a search-agnostic trait
//! - Random playouts and perft for testing and benchmarking

pub mod color;
pub mod board;
pub mod geometry;
pub mod moves;
pub mod path;
pub mod variant;
pub mod hfen;
pub mod game;
pub mod search;
pub mod config;
pub mod playout;

// Re-exports for convenient access
pub use color::{Cell, Color, COLOR_COUNT};
pub use board::{Board, CELL_COUNT};
pub use moves::Move;
pub use path::has_path;
pub use variant::{Team, Variant};
pub use hfen::HfenError;
pub use game::{GameState, GameResult, MoveError, RewardPolicy};
pub use search::SearchState;
pub use config::GameConfig;
pub use playout::{perft, random_playout, seeded_playout, Playout};
