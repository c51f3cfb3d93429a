//! Local observations handed to policies.

use fathom_core::{Cell, CostSurface};
use fathom_space::Square8;

/// A `K x K` window of the cost surface centred on the agent.
///
/// Cells beyond the surface boundary replicate the nearest edge cell, so
/// the patch is always fully populated. Stored row-major; exposed with
/// the single-channel shape `(1, K, K)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Patch {
    size: usize,
    data: Vec<f64>,
}

impl Patch {
    /// Extract the `size x size` window of `surface` centred on `center`.
    ///
    /// `space` must be a clamping grid of the surface's shape.
    pub(crate) fn extract(
        surface: &CostSurface,
        space: &Square8,
        center: Cell,
        size: usize,
    ) -> Self {
        let half = (size / 2) as i64;
        let mut data = Vec::with_capacity(size * size);
        for dr in -half..=half {
            for dc in -half..=half {
                let cell = space.resolve(center, dr, dc).unwrap_or(center);
                data.push(surface.at(cell.row, cell.col));
            }
        }
        Self { size, data }
    }

    /// Side length `K`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// `(1, K, K)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (1, self.size, self.size)
    }

    /// Index of the centre row and column, `K / 2`.
    pub fn center(&self) -> usize {
        self.size / 2
    }

    /// Value at patch-local `(row, col)`, or `None` outside the patch.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.size && col < self.size {
            Some(self.data[row * self.size + col])
        } else {
            None
        }
    }

    /// Value at the patch cell offset by `(dr, dc)` from the centre.
    pub fn relative(&self, dr: i64, dc: i64) -> Option<f64> {
        let c = self.center() as i64;
        let (r, col) = (c + dr, c + dc);
        if r < 0 || col < 0 {
            return None;
        }
        self.get(r as usize, col as usize)
    }

    /// Row-major values.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// What a policy sees after `reset` or `step`.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    /// Cost window around the agent.
    pub local_patch: Patch,
    /// Agent position.
    pub agent_pos: Cell,
    /// Goal position.
    pub goal_pos: Cell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fathom_space::EdgeBehavior;

    fn numbered(rows: usize, cols: usize) -> (CostSurface, Square8) {
        let data = (0..rows * cols).map(|i| i as f64).collect();
        (
            CostSurface::from_vec(rows, cols, data).unwrap(),
            Square8::new(rows, cols, EdgeBehavior::Clamp).unwrap(),
        )
    }

    #[test]
    fn interior_patch_is_plain_window() {
        let (s, space) = numbered(4, 4);
        let p = Patch::extract(&s, &space, Cell::new(1, 1), 3);
        assert_eq!(p.shape(), (1, 3, 3));
        assert_eq!(p.as_slice(), &[0.0, 1.0, 2.0, 4.0, 5.0, 6.0, 8.0, 9.0, 10.0]);
        assert_eq!(p.relative(0, 0), Some(5.0));
    }

    #[test]
    fn corner_patch_replicates_edges() {
        let (s, space) = numbered(3, 3);
        let p = Patch::extract(&s, &space, Cell::new(0, 0), 3);
        assert_eq!(p.as_slice(), &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 3.0, 3.0, 4.0]);
    }

    #[test]
    fn patch_larger_than_grid_is_fully_populated() {
        let (s, space) = numbered(1, 2);
        let p = Patch::extract(&s, &space, Cell::new(0, 1), 5);
        assert_eq!(p.as_slice().len(), 25);
        assert!(p.as_slice().iter().all(|v| *v == 0.0 || *v == 1.0));
        assert_eq!(p.relative(0, 0), Some(1.0));
        assert_eq!(p.relative(0, -2), Some(0.0));
    }

    #[test]
    fn unit_patch_is_the_cell() {
        let (s, space) = numbered(3, 3);
        let p = Patch::extract(&s, &space, Cell::new(2, 1), 1);
        assert_eq!(p.as_slice(), &[7.0]);
        assert_eq!(p.relative(1, 0), None);
        assert_eq!(p.get(0, 1), None);
    }
}
