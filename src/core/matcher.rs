//! Match detection - finds maximal same-color runs on a grid
//!
//! Pure scan over a grid snapshot. Callers are expected to pass a fully
//! occupied grid; an empty cell simply terminates the run on either side.

use arrayvec::ArrayVec;

use crate::core::Grid;
use crate::types::{Coord, GRID_SIZE, MATCH_MIN};

/// One maximal run of >= MATCH_MIN same-colored cells, in scan order
pub type MatchRun = ArrayVec<Coord, { GRID_SIZE as usize }>;

/// All runs found on a grid. An 8-cell line fits at most two runs of
/// length >= 3, so 16 lines bound the list at 32.
pub type MatchList = ArrayVec<MatchRun, 32>;

/// Find all maximal horizontal and vertical runs of length >= MATCH_MIN.
///
/// Each run is reported once at its full length; scanning resumes after
/// the run, so a run of 5 is one entry, not three overlapping triples.
/// A cell shared by a horizontal and a vertical run appears in both
/// entries; removal deduplicates through [`ClearSet`].
pub fn find_matches(grid: &Grid) -> MatchList {
    let mut runs = MatchList::new();

    for row in 0..GRID_SIZE {
        scan_line(grid, |i| Coord::new(row, i), &mut runs);
    }
    for col in 0..GRID_SIZE {
        scan_line(grid, |i| Coord::new(i, col), &mut runs);
    }

    runs
}

/// Scan one full line (row or column), appending maximal runs
fn scan_line(grid: &Grid, at: impl Fn(u8) -> Coord, runs: &mut MatchList) {
    let mut start: u8 = 0;
    while start < GRID_SIZE {
        let Some(Some(color)) = grid.get(at(start)) else {
            start += 1;
            continue;
        };

        let mut end = start + 1;
        while end < GRID_SIZE && grid.get(at(end)) == Some(Some(color)) {
            end += 1;
        }

        if (end - start) as usize >= MATCH_MIN {
            let mut run = MatchRun::new();
            for i in start..end {
                run.push(at(i));
            }
            runs.push(run);
        }

        start = end;
    }
}

/// Set of cells marked for removal, one bit per cell.
///
/// Deduplicates cells shared by intersecting runs; `len` is the distinct
/// cleared-cell count the scoring rules multiply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearSet(u64);

impl ClearSet {
    pub fn new() -> Self {
        Self(0)
    }

    /// Union of all cells in the given runs
    pub fn from_runs(runs: &[MatchRun]) -> Self {
        let mut set = Self::new();
        for run in runs {
            for &at in run {
                set.insert(at);
            }
        }
        set
    }

    fn bit(at: Coord) -> Option<u64> {
        if at.row >= GRID_SIZE || at.col >= GRID_SIZE {
            return None;
        }
        Some(1u64 << (at.row as u64 * GRID_SIZE as u64 + at.col as u64))
    }

    pub fn insert(&mut self, at: Coord) {
        if let Some(bit) = Self::bit(at) {
            self.0 |= bit;
        }
    }

    pub fn contains(&self, at: Coord) -> bool {
        Self::bit(at).is_some_and(|bit| self.0 & bit != 0)
    }

    /// Number of distinct cells in the set
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
