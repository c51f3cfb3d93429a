//! 2D square grid with 8-connected neighbourhood (cardinal + diagonal).

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::grid2d;
use fathom_core::Cell;
use smallvec::SmallVec;
use std::f64::consts::SQRT_2;

/// All 8 offsets with their geometric step length: N, S, W, E, NW, NE, SW, SE.
pub const OFFSETS_8: [(i64, i64, f64); 8] = [
    (-1, 0, 1.0),
    (1, 0, 1.0),
    (0, -1, 1.0),
    (0, 1, 1.0),
    (-1, -1, SQRT_2),
    (-1, 1, SQRT_2),
    (1, -1, SQRT_2),
    (1, 1, SQRT_2),
];

/// A neighbouring cell and the geometric length of the step to reach it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbour {
    /// The neighbouring cell.
    pub cell: Cell,
    /// `1.0` for orthogonal steps, `√2` for diagonal steps.
    pub length: f64,
}

/// A two-dimensional square grid with 8-connected neighbourhood.
///
/// Each cell has coordinate `(row, col)`. Neighbours include the four
/// cardinal directions plus four diagonals, enumerated in the fixed order
/// of [`OFFSETS_8`] so that searches over the grid are deterministic.
///
/// Boundary handling is controlled by [`EdgeBehavior`]:
/// - **Absorb**: edge cells have fewer neighbours (corners have 3, edges have 5)
/// - **Clamp**: off-grid targets collapse onto the boundary cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square8 {
    rows: usize,
    cols: usize,
    edge: EdgeBehavior,
}

impl Square8 {
    /// Create a new grid with `rows * cols` cells and the given edge behavior.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0.
    pub fn new(rows: usize, cols: usize, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        Ok(Self { rows, cols, edge })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Fail with [`SpaceError::CellOutOfBounds`] unless `cell` is in the grid.
    pub fn check(&self, cell: Cell) -> Result<Cell, SpaceError> {
        grid2d::check_bounds(cell, self.rows, self.cols)
    }

    /// Flat row-major index of an in-bounds cell.
    pub fn index_of(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Cell at a flat row-major index.
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.cols, index % self.cols)
    }

    /// Apply the offset `(dr, dc)` to `cell` and resolve each axis under
    /// the grid's edge behavior.
    ///
    /// With [`EdgeBehavior::Clamp`] this always returns `Some`; with
    /// [`EdgeBehavior::Absorb`] off-grid targets yield `None`.
    pub fn resolve(&self, cell: Cell, dr: i64, dc: i64) -> Option<Cell> {
        let r = grid2d::resolve_axis(cell.row as i64 + dr, self.rows, self.edge)?;
        let c = grid2d::resolve_axis(cell.col as i64 + dc, self.cols, self.edge)?;
        Some(Cell::new(r, c))
    }

    /// The 8-connected neighbours of `cell` with their step lengths.
    ///
    /// Under Clamp a boundary offset may resolve back onto `cell` itself
    /// or onto a cell already listed; such targets are skipped so every
    /// returned neighbour is distinct from `cell` and from each other.
    pub fn neighbours(&self, cell: Cell) -> SmallVec<[Neighbour; 8]> {
        let mut result: SmallVec<[Neighbour; 8]> = SmallVec::new();
        for (dr, dc, length) in OFFSETS_8 {
            if let Some(n) = self.resolve(cell, dr, dc) {
                if n != cell && !result.iter().any(|x| x.cell == n) {
                    result.push(Neighbour { cell: n, length });
                }
            }
        }
        result
    }

    /// Chebyshev (L-inf) distance, the graph geodesic in hop count.
    pub fn distance(&self, a: Cell, b: Cell) -> usize {
        let (dr, dc) = a.abs_diff(b);
        dr.max(dc)
    }

    /// All cells in row-major order.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = Cell> {
        grid2d::canonical_ordering(self.rows, self.cols)
    }
}
