//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O.

pub mod game_state;
pub mod gravity;
pub mod grid;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use game_state::{FallAnim, GameState, Phase};
pub use gravity::{settle, FallList, TokenFall};
pub use grid::Grid;
pub use matcher::{find_matches, ClearSet, MatchList, MatchRun};
pub use rng::SimpleRng;
pub use scoring::ScoreKeeper;
pub use snapshot::{GameSnapshot, TileView};
