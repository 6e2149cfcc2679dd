//! Game state module - manages the complete game state
//!
//! This module ties together all core components: grid, match detection,
//! gravity, RNG, and scoring. It handles selection, swap validation, the
//! cascade loop (remove -> fall -> refill -> re-check), the move budget,
//! and the game-over transition.
//!
//! The cascade is not synchronous: `tick` advances at most one step
//! (fade increment, fall increment, or phase transition), so a cascade
//! spans many ticks while the player's input is dropped.

use arrayvec::ArrayVec;

use crate::core::gravity::{self, TokenFall};
use crate::core::matcher::{self, ClearSet, MatchRun};
use crate::core::rng::SimpleRng;
use crate::core::scoring::ScoreKeeper;
use crate::core::snapshot::GameSnapshot;
use crate::core::Grid;
use crate::types::{
    Coord, BOARD_GEN_RETRY_CAP, CELL_COUNT, CELL_UNITS, FADE_TICKS, GRID_SIZE, MOVE_BUDGET,
};

/// Machine states.
///
/// `Removing`, `Falling`, and `Refilling` are the internal steps of one
/// opaque "resolving" pass; input is dropped while any of them is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Awaiting the first pick
    Idle,
    /// One cell selected, awaiting the second pick
    AwaitingSecondPick,
    /// Matched tokens fading out
    Removing,
    /// Tokens dropping into cleared space
    Falling,
    /// Empty cells about to be refilled and re-checked
    Refilling,
    /// Terminal; only exit is an explicit restart
    GameOver,
}

/// In-flight fall animation for one token.
///
/// Cosmetic only: the grid already holds the token at `to_row`; this just
/// tracks how far above it the renderer should still draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallAnim {
    pub col: u8,
    pub to_row: u8,
    /// Total travel distance in sub-cell units
    total: u16,
    /// Distance covered so far
    progress: u16,
    /// Units advanced per tick (randomized per token)
    speed: u16,
}

impl FallAnim {
    fn new(fall: TokenFall, speed: u16) -> Self {
        let rows = (fall.to_row - fall.from_row) as u16;
        Self {
            col: fall.col,
            to_row: fall.to_row,
            total: rows * CELL_UNITS,
            progress: 0,
            speed,
        }
    }

    fn advance(&mut self) {
        self.progress = (self.progress + self.speed).min(self.total);
    }

    fn landed(&self) -> bool {
        self.progress >= self.total
    }

    /// Whole rows the token still has to travel (rounded up)
    pub fn rise_rows(&self) -> u8 {
        let remaining = self.total - self.progress;
        remaining.div_ceil(CELL_UNITS) as u8
    }
}

/// Complete game session: board, scores, move budget, and machine state.
///
/// Created at game start and rebuilt wholesale on restart; no partial
/// state survives a reset.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    rng: SimpleRng,
    phase: Phase,
    /// Present only while phase == AwaitingSecondPick
    selection: Option<Coord>,
    scores: ScoreKeeper,
    moves_left: u32,
    /// Ticks elapsed in the current removal fade
    fade_ticks: u8,
    /// Cells queued for removal this cascade step
    clearing: ClearSet,
    falls: ArrayVec<FallAnim, CELL_COUNT>,
}

impl GameState {
    /// Create a new session with a freshly generated match-free board
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut grid = Grid::new();

        // Regenerate the whole board until it starts without matches.
        // Bounded so the constructor provably terminates.
        for _ in 0..BOARD_GEN_RETRY_CAP {
            for row in 0..GRID_SIZE {
                for col in 0..GRID_SIZE {
                    let color = rng.token_color();
                    grid.set(Coord::new(row, col), Some(color));
                }
            }
            if matcher::find_matches(&grid).is_empty() {
                break;
            }
        }

        Self {
            grid,
            rng,
            phase: Phase::Idle,
            selection: None,
            scores: ScoreKeeper::new(),
            moves_left: MOVE_BUDGET,
            fade_ticks: 0,
            clearing: ClearSet::new(),
            falls: ArrayVec::new(),
        }
    }

    /// Build a session over a provided board, taken as-is.
    ///
    /// Intended for scripted scenarios and tests; callers normally pass a
    /// full, match-free grid.
    pub fn from_grid(grid: Grid, seed: u32) -> Self {
        Self {
            grid,
            rng: SimpleRng::new(seed),
            phase: Phase::Idle,
            selection: None,
            scores: ScoreKeeper::new(),
            moves_left: MOVE_BUDGET,
            fade_ticks: 0,
            clearing: ClearSet::new(),
            falls: ArrayVec::new(),
        }
    }

    /// Override the move budget (scenario setup)
    pub fn with_moves(mut self, moves: u32) -> Self {
        self.moves_left = moves;
        if moves == 0 {
            self.phase = Phase::GameOver;
        }
        self
    }

    /// Discard everything and start over; valid in any state.
    ///
    /// This is the only cancellation: an in-flight cascade is dropped
    /// with the rest of the session.
    pub fn restart(&mut self) {
        *self = Self::new(self.rng.state());
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Whether a cascade is being resolved (input is dropped meanwhile)
    pub fn in_resolution(&self) -> bool {
        matches!(
            self.phase,
            Phase::Removing | Phase::Falling | Phase::Refilling
        )
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn combo(&self) -> u32 {
        self.scores.combo()
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Handle a tap on a board cell.
    ///
    /// Callers map clicks to coordinates first (off-board clicks never
    /// reach here). Taps are ignored unless the machine is idle or
    /// holding a selection; events during resolution are dropped, not
    /// buffered.
    pub fn tap(&mut self, at: Coord) {
        match self.phase {
            Phase::Idle => {
                if self.grid.is_occupied(at) {
                    self.selection = Some(at);
                    self.phase = Phase::AwaitingSecondPick;
                }
            }
            Phase::AwaitingSecondPick => {
                let Some(first) = self.selection.take() else {
                    self.phase = Phase::Idle;
                    return;
                };
                if at == first {
                    // Tapping the selection again deselects
                    self.phase = Phase::Idle;
                    return;
                }
                self.try_swap(first, at);
            }
            _ => {}
        }
    }

    /// Attempt to swap two picked cells.
    ///
    /// Adjacency is enforced here, at swap time, not at pick time: any
    /// second pick lands here, and a non-adjacent pair silently fails
    /// back to idle with nothing changed. A swap that produces no match
    /// is reverted exactly and costs no move; only a matching swap
    /// consumes budget.
    fn try_swap(&mut self, a: Coord, b: Coord) {
        if !Grid::is_adjacent(a, b) || !self.grid.is_occupied(b) {
            self.phase = Phase::Idle;
            return;
        }

        self.grid.swap(a, b);
        let runs = matcher::find_matches(&self.grid);
        if runs.is_empty() {
            self.grid.swap(a, b);
            self.phase = Phase::Idle;
            return;
        }

        self.moves_left = self.moves_left.saturating_sub(1);
        self.begin_removal(&runs);
    }

    /// Start a removal phase for the given runs (one cascade step).
    ///
    /// The combo climbs and the score is awarded the moment removal is
    /// triggered; the fade that follows is cosmetic.
    fn begin_removal(&mut self, runs: &[MatchRun]) {
        let cleared = ClearSet::from_runs(runs);
        self.scores.begin_clear(cleared.len());
        self.clearing = cleared;
        self.fade_ticks = 0;
        self.selection = None;
        self.phase = Phase::Removing;
    }

    /// Advance the machine by one tick.
    ///
    /// At most one animation/logic step per call; idle phases do nothing.
    pub fn tick(&mut self) {
        match self.phase {
            Phase::Idle | Phase::AwaitingSecondPick | Phase::GameOver => {}
            Phase::Removing => self.tick_removing(),
            Phase::Falling => self.tick_falling(),
            Phase::Refilling => self.tick_refill(),
        }
    }

    fn tick_removing(&mut self) {
        self.fade_ticks += 1;
        if self.fade_ticks < FADE_TICKS {
            return;
        }

        // Fade complete: marked cells become empty, then gravity runs
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let at = Coord::new(row, col);
                if self.clearing.contains(at) {
                    self.grid.set(at, None);
                }
            }
        }
        self.clearing = ClearSet::new();

        let moved = gravity::settle(&mut self.grid);
        self.falls.clear();
        for fall in &moved {
            let speed = self.rng.fall_speed();
            self.falls.push(FallAnim::new(*fall, speed));
        }

        // Nothing had room to fall when the cleared cells hugged the top
        self.phase = if self.falls.is_empty() {
            Phase::Refilling
        } else {
            Phase::Falling
        };
    }

    fn tick_falling(&mut self) {
        let mut all_landed = true;
        for anim in &mut self.falls {
            anim.advance();
            if !anim.landed() {
                all_landed = false;
            }
        }
        if all_landed {
            self.falls.clear();
            self.phase = Phase::Refilling;
        }
    }

    fn tick_refill(&mut self) {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let at = Coord::new(row, col);
                if self.grid.get(at) == Some(None) {
                    let color = self.rng.token_color();
                    self.grid.set(at, Some(color));
                }
            }
        }

        let runs = matcher::find_matches(&self.grid);
        if runs.is_empty() {
            // Cascade over: the combo resets and the machine settles
            self.scores.end_cascade();
            self.settle_to_idle();
        } else {
            self.begin_removal(&runs);
        }
    }

    /// Settle back to idle, or game over once the budget is spent
    fn settle_to_idle(&mut self) {
        self.phase = if self.moves_left == 0 {
            Phase::GameOver
        } else {
            Phase::Idle
        };
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let at = Coord::new(row, col);
                let tile = &mut out.tiles[row as usize][col as usize];
                tile.color = self.grid.get(at).unwrap_or(None);
                tile.selected = self.selection == Some(at);
                if self.clearing.contains(at) {
                    tile.fade = Some(self.fade_ticks);
                }
            }
        }
        for anim in &self.falls {
            out.tiles[anim.to_row as usize][anim.col as usize].rise = anim.rise_rows();
        }

        out.score = self.scores.score();
        out.combo = self.scores.combo();
        out.moves_left = self.moves_left;
        out.game_over = self.game_over();
        out.resolving = self.in_resolution();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_full_and_match_free() {
        for seed in [1, 2, 42, 12345, 0xDEAD_BEEF] {
            let state = GameState::new(seed);
            assert!(state.grid().is_full());
            assert!(matcher::find_matches(state.grid()).is_empty());
            assert_eq!(state.phase(), Phase::Idle);
            assert_eq!(state.moves_left(), MOVE_BUDGET);
        }
    }

    #[test]
    fn test_first_tap_selects_second_tap_on_same_cell_deselects() {
        let mut state = GameState::new(7);
        let at = Coord::new(3, 3);

        state.tap(at);
        assert_eq!(state.phase(), Phase::AwaitingSecondPick);
        assert_eq!(state.selection(), Some(at));

        state.tap(at);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.selection(), None);
    }

    #[test]
    fn test_taps_are_dropped_while_resolving() {
        let mut state = GameState::new(7);
        // Force a resolving phase by hand-driving the machine
        state.phase = Phase::Removing;
        state.tap(Coord::new(0, 0));
        assert_eq!(state.selection(), None);
        assert_eq!(state.phase(), Phase::Removing);
    }

    #[test]
    fn test_restart_rebuilds_the_session_wholesale() {
        let mut state = GameState::new(7);
        state.tap(Coord::new(2, 2));
        state.restart();

        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.selection(), None);
        assert_eq!(state.score(), 0);
        assert_eq!(state.moves_left(), MOVE_BUDGET);
        assert!(state.grid().is_full());
        assert!(matcher::find_matches(state.grid()).is_empty());
    }

    #[test]
    fn test_fall_anim_rise_rounds_up_partial_rows() {
        let fall = TokenFall {
            col: 0,
            from_row: 0,
            to_row: 2,
        };
        let mut anim = FallAnim::new(fall, 10);
        assert_eq!(anim.rise_rows(), 2);

        anim.advance();
        // 10 of 128 units covered: still two partial rows above target
        assert_eq!(anim.rise_rows(), 2);

        while !anim.landed() {
            anim.advance();
        }
        assert_eq!(anim.rise_rows(), 0);
    }
}
