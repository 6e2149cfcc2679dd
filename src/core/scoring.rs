//! Scoring module - clear points and combo accumulation
//!
//! The rules are small: every cascade step that finds at least one match
//! raises the combo by one, and the cleared cells (deduplicated across
//! intersecting runs) are worth `cells * 10 * combo`. The combo falls
//! back to zero only when a cascade fully settles without a match.

use crate::types::CLEAR_POINTS_PER_CELL;

/// Points awarded for clearing `cells` distinct cells at a given combo
pub fn clear_points(cells: usize, combo: u32) -> u32 {
    (cells as u32)
        .saturating_mul(CLEAR_POINTS_PER_CELL)
        .saturating_mul(combo)
}

/// Cumulative score and combo counter for one session.
///
/// Pure accumulator: all mutation happens through the state machine's
/// documented triggers. The score never decreases within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreKeeper {
    score: u32,
    combo: u32,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a removal phase: the combo climbs first, then
    /// the cleared cells are scored against it. Returns the points awarded.
    pub fn begin_clear(&mut self, cells: usize) -> u32 {
        self.combo += 1;
        let points = clear_points(cells, self.combo);
        self.score = self.score.saturating_add(points);
        points
    }

    /// A cascade settled with no further matches
    pub fn end_cascade(&mut self) {
        self.combo = 0;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }
}
