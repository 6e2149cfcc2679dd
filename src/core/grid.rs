//! Grid module - owns the board's cell storage
//!
//! The grid is an 8x8 array where each cell is empty or holds one colored
//! token. Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (row, col) with row 0 at the top and col 0 at the left.
//! Tokens carry no position of their own; position is the grid index.

use crate::types::{Cell, Coord, CELL_COUNT, GRID_SIZE};

/// The game grid - GRID_SIZE x GRID_SIZE cells in flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(at: Coord) -> Option<usize> {
        if at.row >= GRID_SIZE || at.col >= GRID_SIZE {
            return None;
        }
        Some((at.row as usize) * (GRID_SIZE as usize) + (at.col as usize))
    }

    /// Get cell at a coordinate
    /// Returns None if out of bounds
    pub fn get(&self, at: Coord) -> Option<Cell> {
        Self::index(at).map(|idx| self.cells[idx])
    }

    /// Set cell at a coordinate
    /// Returns false if out of bounds
    pub fn set(&mut self, at: Coord, cell: Cell) -> bool {
        match Self::index(at) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a coordinate is in bounds and holds a token
    pub fn is_occupied(&self, at: Coord) -> bool {
        matches!(self.get(at), Some(Some(_)))
    }

    /// Check whether two coordinates are swap-adjacent
    /// (Manhattan distance exactly 1: same row or same column)
    pub fn is_adjacent(a: Coord, b: Coord) -> bool {
        let dr = a.row.abs_diff(b.row);
        let dc = a.col.abs_diff(b.col);
        dr + dc == 1
    }

    /// Swap the contents of two cells
    /// No-op if either coordinate is out of bounds
    pub fn swap(&mut self, a: Coord, b: Coord) {
        if let (Some(ia), Some(ib)) = (Self::index(a), Self::index(b)) {
            self.cells.swap(ia, ib);
        }
    }

    /// Check if every cell holds a token
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenColor;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(Coord::new(0, 0)), Some(0));
        assert_eq!(Grid::index(Coord::new(0, 7)), Some(7));
        assert_eq!(Grid::index(Coord::new(1, 0)), Some(8));
        assert_eq!(Grid::index(Coord::new(7, 7)), Some(63));
        assert_eq!(Grid::index(Coord::new(8, 0)), None);
        assert_eq!(Grid::index(Coord::new(0, 8)), None);
    }

    #[test]
    fn test_grid_get_set() {
        let mut grid = Grid::new();

        assert!(grid.set(Coord::new(3, 4), Some(TokenColor::Red)));
        assert_eq!(grid.get(Coord::new(3, 4)), Some(Some(TokenColor::Red)));

        assert!(grid.set(Coord::new(3, 4), None));
        assert_eq!(grid.get(Coord::new(3, 4)), Some(None));

        // Out of bounds
        assert!(!grid.set(Coord::new(8, 0), Some(TokenColor::Blue)));
        assert_eq!(grid.get(Coord::new(0, 8)), None);
    }

    #[test]
    fn test_adjacency_is_manhattan_distance_one() {
        let center = Coord::new(4, 4);

        assert!(Grid::is_adjacent(center, Coord::new(3, 4)));
        assert!(Grid::is_adjacent(center, Coord::new(5, 4)));
        assert!(Grid::is_adjacent(center, Coord::new(4, 3)));
        assert!(Grid::is_adjacent(center, Coord::new(4, 5)));

        // Same cell, diagonal, and distance-2 are not adjacent
        assert!(!Grid::is_adjacent(center, center));
        assert!(!Grid::is_adjacent(center, Coord::new(3, 3)));
        assert!(!Grid::is_adjacent(center, Coord::new(4, 6)));
    }

    #[test]
    fn test_swap_is_an_involution() {
        let mut grid = Grid::new();
        let a = Coord::new(2, 2);
        let b = Coord::new(2, 3);
        grid.set(a, Some(TokenColor::Green));
        grid.set(b, Some(TokenColor::Yellow));

        let before = grid.clone();
        grid.swap(a, b);
        assert_eq!(grid.get(a), Some(Some(TokenColor::Yellow)));
        grid.swap(a, b);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_is_full() {
        let mut grid = Grid::new();
        assert!(!grid.is_full());

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                grid.set(Coord::new(row, col), Some(TokenColor::Cyan));
            }
        }
        assert!(grid.is_full());

        grid.set(Coord::new(0, 0), None);
        assert!(!grid.is_full());
    }
}
