//! Shared axis helpers for 2D grids.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use fathom_core::Cell;

/// Resolve a single axis value under the given edge behavior.
/// Returns `Some(resolved)` or `None` for Absorb out-of-bounds.
pub fn resolve_axis(val: i64, len: usize, edge: EdgeBehavior) -> Option<usize> {
    let n = len as i64;
    if val >= 0 && val < n {
        return Some(val as usize);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Clamp => Some(val.clamp(0, n - 1) as usize),
    }
}

/// Check that a cell is inside a `rows x cols` grid.
pub fn check_bounds(cell: Cell, rows: usize, cols: usize) -> Result<Cell, SpaceError> {
    if cell.row < rows && cell.col < cols {
        Ok(cell)
    } else {
        Err(SpaceError::CellOutOfBounds {
            cell,
            shape: (rows, cols),
        })
    }
}

/// Row-major canonical ordering: `(0,0), (0,1), ..., (rows-1, cols-1)`.
pub fn canonical_ordering(rows: usize, cols: usize) -> impl Iterator<Item = Cell> {
    (0..rows).flat_map(move |r| (0..cols).map(move |c| Cell::new(r, c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_axis_in_bounds() {
        assert_eq!(resolve_axis(2, 5, EdgeBehavior::Absorb), Some(2));
        assert_eq!(resolve_axis(0, 5, EdgeBehavior::Clamp), Some(0));
    }

    #[test]
    fn resolve_axis_absorb_out_of_bounds() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Absorb), None);
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Absorb), None);
    }

    #[test]
    fn resolve_axis_clamp() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Clamp), Some(0));
        assert_eq!(resolve_axis(7, 5, EdgeBehavior::Clamp), Some(4));
        assert_eq!(resolve_axis(-3, 1, EdgeBehavior::Clamp), Some(0));
    }

    #[test]
    fn check_bounds_reports_shape() {
        assert!(check_bounds(Cell::new(2, 2), 3, 3).is_ok());
        assert_eq!(
            check_bounds(Cell::new(3, 0), 3, 3),
            Err(SpaceError::CellOutOfBounds {
                cell: Cell::new(3, 0),
                shape: (3, 3)
            })
        );
    }

    #[test]
    fn canonical_ordering_is_row_major() {
        let cells: Vec<Cell> = canonical_ordering(2, 2).collect();
        assert_eq!(
            cells,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
        );
    }
}
