//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (the board is square)
pub const GRID_SIZE: u8 = 8;
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Minimum run length that counts as a match
pub const MATCH_MIN: usize = 3;

/// Player-initiated swaps available per session
pub const MOVE_BUDGET: u32 = 30;

/// Game timing constants (tick-count based, not wall-clock based)
pub const TICK_MS: u32 = 16;
pub const FADE_TICKS: u8 = 10;

/// Fall animation resolution: sub-cell units per row of travel
pub const CELL_UNITS: u16 = 64;
pub const FALL_SPEED_MIN: u16 = 5;
pub const FALL_SPEED_MAX: u16 = 15;

/// Scoring base: points per cleared cell before the combo multiplier
pub const CLEAR_POINTS_PER_CELL: u32 = 10;

/// Retry cap for generating a match-free starting board
pub const BOARD_GEN_RETRY_CAP: u32 = 128;

/// Token colors (fixed palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Cyan,
}

impl TokenColor {
    /// All palette colors, in draw-index order
    pub const ALL: [TokenColor; 6] = [
        TokenColor::Red,
        TokenColor::Green,
        TokenColor::Blue,
        TokenColor::Yellow,
        TokenColor::Purple,
        TokenColor::Cyan,
    ];

    /// Number of colors in the palette
    pub const COUNT: u32 = Self::ALL.len() as u32;

    /// Map a draw index to a color (index taken modulo the palette size)
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % Self::COUNT) as usize]
    }
}

/// Cell on the board (None = empty, Some = holds a token of that color)
pub type Cell = Option<TokenColor>;

/// Board coordinate, row/col in [0, GRID_SIZE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Commands produced by the input layer for the runner loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Move the keyboard cursor one cell
    CursorMove(CursorDir),
    /// Tap the cell under the keyboard cursor
    TapCursor,
    /// Start a fresh session (valid in any state)
    Restart,
}

/// Keyboard cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorDir {
    Up,
    Down,
    Left,
    Right,
}
