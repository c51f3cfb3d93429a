//! The read-only cost grid searched by the pathfinder.

use fathom_core::{Cell, CostSurface, PathError, Raster};

/// A 2D grid of per-cell traversal costs.
///
/// Costs must be `>= 0` and not NaN. `+inf` is permitted and makes the
/// cell impassable: every edge touching it has infinite cost and is
/// never relaxed.
pub trait CostField {
    /// `(rows, cols)`.
    fn shape(&self) -> (usize, usize);

    /// Cost of an in-bounds `cell`.
    fn cell_cost(&self, cell: Cell) -> f64;
}

impl CostField for Raster {
    fn shape(&self) -> (usize, usize) {
        Raster::shape(self)
    }

    fn cell_cost(&self, cell: Cell) -> f64 {
        self.at(cell.row, cell.col)
    }
}

impl CostField for CostSurface {
    fn shape(&self) -> (usize, usize) {
        self.raster().shape()
    }

    fn cell_cost(&self, cell: Cell) -> f64 {
        self.raster().at(cell.row, cell.col)
    }
}

impl<F: CostField + ?Sized> CostField for &F {
    fn shape(&self) -> (usize, usize) {
        (**self).shape()
    }

    fn cell_cost(&self, cell: Cell) -> f64 {
        (**self).cell_cost(cell)
    }
}

/// Cost of moving from `from` to its neighbour `to` along a step of
/// geometric `length`.
#[inline]
pub fn edge_cost<F: CostField + ?Sized>(field: &F, from: Cell, to: Cell, length: f64) -> f64 {
    length * 0.5 * (field.cell_cost(from) + field.cell_cost(to))
}

/// Sum of edge costs along `path`.
///
/// Returns `None` if any cell is out of bounds or any two consecutive
/// cells are not 8-adjacent. A path of zero or one cell costs `0.0`.
pub fn path_cost<F: CostField + ?Sized>(field: &F, path: &[Cell]) -> Option<f64> {
    let (rows, cols) = field.shape();
    if path.iter().any(|c| c.row >= rows || c.col >= cols) {
        return None;
    }
    let mut total = 0.0;
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if !a.is_adjacent8(b) {
            return None;
        }
        let (dr, dc) = a.abs_diff(b);
        let length = if dr == 1 && dc == 1 {
            std::f64::consts::SQRT_2
        } else {
            1.0
        };
        total += edge_cost(field, a, b, length);
    }
    Some(total)
}

/// Check that `field` is searchable and that `start` and `goal` lie in it.
pub(crate) fn validate<F: CostField + ?Sized>(
    field: &F,
    start: Cell,
    goal: Cell,
) -> Result<(), PathError> {
    let shape = field.shape();
    let (rows, cols) = shape;
    if rows == 0 || cols == 0 {
        return Err(PathError::EmptyGrid);
    }
    if start.row >= rows || start.col >= cols {
        return Err(PathError::StartOutOfBounds { cell: start, shape });
    }
    if goal.row >= rows || goal.col >= cols {
        return Err(PathError::GoalOutOfBounds { cell: goal, shape });
    }
    for row in 0..rows {
        for col in 0..cols {
            let cell = Cell::new(row, col);
            let value = field.cell_cost(cell);
            if value.is_nan() || value < 0.0 {
                return Err(PathError::InvalidCellCost { cell, value });
            }
        }
    }
    Ok(())
}
