//! The aggregated cost surface.

use std::ops::Deref;

use crate::cell::Cell;
use crate::error::RasterError;
use crate::raster::Raster;

/// A single 2D grid of traversal costs.
///
/// Invariant: every value is finite and `>= 0`. Surfaces produced by the
/// cost aggregator are additionally rescaled into `[0, 1]` (or all-zero).
/// The surface is immutable once built; the pathfinder and the grid world
/// only read from it.
///
/// Dereferences to [`Raster`] for read-only access.
#[derive(Clone, Debug, PartialEq)]
pub struct CostSurface {
    raster: Raster,
}

impl CostSurface {
    /// Validate and wrap a raster as a cost surface.
    ///
    /// # Errors
    ///
    /// [`RasterError::NonFiniteCost`] for NaN or infinite values,
    /// [`RasterError::NegativeCost`] for values below zero.
    pub fn new(raster: Raster) -> Result<Self, RasterError> {
        for (i, &v) in raster.as_slice().iter().enumerate() {
            if !v.is_finite() {
                return Err(RasterError::NonFiniteCost {
                    cell: raster.cell_at(i),
                });
            }
            if v < 0.0 {
                return Err(RasterError::NegativeCost {
                    cell: raster.cell_at(i),
                    value: v,
                });
            }
        }
        Ok(Self { raster })
    }

    /// Build a validated surface from a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, RasterError> {
        Self::new(Raster::new(rows, cols, data)?)
    }

    /// Cost of `cell`, or `None` if out of bounds.
    pub fn cost(&self, cell: Cell) -> Option<f64> {
        self.raster.get(cell)
    }

    /// Largest cell cost.
    pub fn max_cost(&self) -> f64 {
        self.raster.as_slice().iter().copied().fold(0.0, f64::max)
    }

    /// The underlying raster.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Consume the surface, returning the underlying raster.
    pub fn into_raster(self) -> Raster {
        self.raster
    }
}

impl Deref for CostSurface {
    type Target = Raster;

    fn deref(&self) -> &Raster {
        &self.raster
    }
}

impl TryFrom<Raster> for CostSurface {
    type Error = RasterError;

    fn try_from(raster: Raster) -> Result<Self, Self::Error> {
        Self::new(raster)
    }
}
