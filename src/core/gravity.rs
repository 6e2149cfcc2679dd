//! Gravity resolution - compacts each column's tokens downward
//!
//! Pure grid transform: the mutation is immediate and authoritative, and
//! the returned fall list only drives the cosmetic fall animation.
//! No match checking happens here.

use arrayvec::ArrayVec;

use crate::core::Grid;
use crate::types::{Coord, CELL_COUNT, GRID_SIZE};

/// One token displaced by gravity (column never changes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenFall {
    pub col: u8,
    pub from_row: u8,
    pub to_row: u8,
}

/// All tokens moved by one settle pass
pub type FallList = ArrayVec<TokenFall, CELL_COUNT>;

/// Drop every token to the lowest free position in its column.
///
/// Compaction is stable: a token nearer the bottom stays nearer the
/// bottom, and all emptied positions end up at the top of the column.
/// Applying this to a full grid is a no-op (returns an empty list).
pub fn settle(grid: &mut Grid) -> FallList {
    let mut falls = FallList::new();

    for col in 0..GRID_SIZE {
        // Write cursor walks up from the bottom as tokens are placed
        let mut write = GRID_SIZE;
        for row in (0..GRID_SIZE).rev() {
            let at = Coord::new(row, col);
            let Some(Some(color)) = grid.get(at) else {
                continue;
            };

            write -= 1;
            if write != row {
                grid.set(Coord::new(write, col), Some(color));
                grid.set(at, None);
                falls.push(TokenFall {
                    col,
                    from_row: row,
                    to_row: write,
                });
            }
        }
    }

    falls
}
