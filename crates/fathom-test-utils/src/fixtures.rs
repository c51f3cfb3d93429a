//! Reusable surfaces and channel stacks.
//!
//! - [`uniform_surface`]: every cell has the same cost.
//! - [`spike_surface`]: zero everywhere except one cell.
//! - [`walled_raster`]: a raw raster with an impassable `+inf` column.
//! - [`seeded_surface`] / [`seeded_stack`]: reproducible random values.

use fathom_core::{Cell, ChannelStack, CostSurface, Raster};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn uniform_surface(rows: usize, cols: usize, cost: f64) -> CostSurface {
    CostSurface::from_vec(rows, cols, vec![cost; rows * cols]).expect("valid uniform surface")
}

/// Zero-cost surface with `value` at `at`.
pub fn spike_surface(rows: usize, cols: usize, at: Cell, value: f64) -> CostSurface {
    let raster = Raster::from_fn(rows, cols, |c| if c == at { value } else { 0.0 })
        .expect("valid spike raster");
    CostSurface::new(raster).expect("valid spike surface")
}

/// Zero-cost raster whose column `wall_col` is entirely `+inf`.
pub fn walled_raster(rows: usize, cols: usize, wall_col: usize) -> Raster {
    Raster::from_fn(rows, cols, |c| {
        if c.col == wall_col {
            f64::INFINITY
        } else {
            0.0
        }
    })
    .expect("valid walled raster")
}

/// Surface with costs drawn uniformly from `[0, 1)`.
pub fn seeded_surface(rows: usize, cols: usize, seed: u64) -> CostSurface {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let raster =
        Raster::from_fn(rows, cols, |_| rng.random::<f64>()).expect("valid seeded raster");
    CostSurface::new(raster).expect("valid seeded surface")
}

/// `channels` raw channels with values drawn uniformly from `[-scale, scale)`.
pub fn seeded_stack(
    channels: usize,
    rows: usize,
    cols: usize,
    scale: f64,
    seed: u64,
) -> ChannelStack {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rasters = (0..channels)
        .map(|_| {
            Raster::from_fn(rows, cols, |_| rng.random_range(-scale..scale))
                .expect("valid seeded channel")
        })
        .collect();
    ChannelStack::new(rasters).expect("valid seeded stack")
}
