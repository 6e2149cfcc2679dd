//! TUI Crush - a terminal match-three puzzle game.
//!
//! `core` holds the pure engine (grid, match detection, gravity, the
//! cascade state machine, scoring); `term` and `input` are the thin
//! crossterm shell around it.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
