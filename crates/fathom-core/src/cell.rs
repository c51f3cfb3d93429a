//! Grid cell coordinates.

use std::fmt;

/// A `(row, col)` coordinate on a 2D grid.
///
/// Cells are plain coordinates; whether a cell lies inside a particular
/// grid is checked by the consumer (see [`Raster::contains`](crate::Raster::contains)).
/// Ordering is row-major, which matches the flat layout of [`Raster`](crate::Raster).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, `0..rows`.
    pub row: usize,
    /// Column index, `0..cols`.
    pub col: usize,
}

impl Cell {
    /// Create a cell at `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a signed `(dr, dc)` offset, returning `None` if either axis
    /// would go below zero.
    ///
    /// The upper bound is not checked; callers resolve it against their
    /// grid dimensions.
    pub fn offset(self, dr: i64, dc: i64) -> Option<Self> {
        let row = self.row as i64 + dr;
        let col = self.col as i64 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Some(Self::new(row as usize, col as usize))
    }

    /// Absolute per-axis distance `(|Δrow|, |Δcol|)` to `other`.
    pub fn abs_diff(self, other: Cell) -> (usize, usize) {
        (self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }

    /// Whether `other` is one of the 8 cells surrounding `self`.
    pub fn is_adjacent8(self, other: Cell) -> bool {
        let (dr, dc) = self.abs_diff(other);
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_rejects_negative() {
        assert_eq!(Cell::new(0, 3).offset(-1, 0), None);
        assert_eq!(Cell::new(2, 0).offset(0, -1), None);
        assert_eq!(Cell::new(2, 2).offset(-1, 1), Some(Cell::new(1, 3)));
    }

    #[test]
    fn adjacency_excludes_self_and_far_cells() {
        let c = Cell::new(3, 3);
        assert!(!c.is_adjacent8(c));
        assert!(c.is_adjacent8(Cell::new(2, 4)));
        assert!(c.is_adjacent8(Cell::new(4, 3)));
        assert!(!c.is_adjacent8(Cell::new(5, 3)));
    }

    #[test]
    fn tuple_round_trip_and_display() {
        let c: Cell = (4, 7).into();
        assert_eq!(c, Cell::new(4, 7));
        assert_eq!(c.to_string(), "(4, 7)");
        let t: (usize, usize) = c.into();
        assert_eq!(t, (4, 7));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 5), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 5), Cell::new(1, 0)]);
    }
}
