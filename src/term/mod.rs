//! Terminal rendering module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into
//! a simple framebuffer that is flushed to a crossterm backend.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
