//! Input module - event-to-command mapping for the terminal runner.

pub mod handler;

pub use handler::{map_key, map_mouse, should_quit};
