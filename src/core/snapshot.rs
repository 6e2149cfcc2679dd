use crate::types::{Cell, GRID_SIZE};

/// Per-cell render view: logical contents plus cosmetic progress values.
///
/// Rendering consumes only this projection; logic transitions never
/// depend on what (or whether) anything is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileView {
    pub color: Cell,
    pub selected: bool,
    /// Fade progress in ticks while the tile is being removed
    pub fade: Option<u8>,
    /// Whole rows above its cell the token should still be drawn while falling
    pub rise: u8,
}

/// Everything the renderer reads each frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub tiles: [[TileView; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub score: u32,
    pub combo: u32,
    pub moves_left: u32,
    pub game_over: bool,
    pub resolving: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the machine would act on a tap right now
    pub fn accepting_input(&self) -> bool {
        !self.game_over && !self.resolving
    }
}
