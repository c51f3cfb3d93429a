//! Benchmark profiles and utilities for the Fathom toolkit.
//!
//! Provides pre-built [`LoaderConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), 4 channels, sigma 1.0
//! - [`stress_profile`]: 316x316 grid (~100K cells), same pipeline
//! - [`reference_surface`]: the aggregated surface of a profile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fathom_core::{Cell, CostSurface};
use fathom_cost::CostAggregator;
use fathom_data::{generate_random_grid, LoadError, LoaderConfig};

/// Build a reference benchmark profile: 100x100 grid (10K cells).
///
/// Generated channels with the standalone weights, smoothed with sigma 1.0.
pub fn reference_profile(seed: u64) -> LoaderConfig {
    LoaderConfig {
        grid_size: (100, 100),
        smooth_sigma: 1.0,
        seed,
        ..LoaderConfig::standalone()
    }
}

/// Build a stress benchmark profile: 316x316 grid (~100K cells).
///
/// Same pipeline as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> LoaderConfig {
    LoaderConfig {
        grid_size: (316, 316),
        ..reference_profile(seed)
    }
}

/// Generate and aggregate the surface described by a generated-grid profile.
pub fn reference_surface(profile: &LoaderConfig) -> Result<CostSurface, LoadError> {
    let stack = generate_random_grid(&profile.grid_spec())?;
    let weights = profile
        .weights
        .clone()
        .unwrap_or_else(|| vec![1.0; stack.channel_count()]);
    let surface = CostAggregator::builder()
        .weights(weights)
        .smooth_sigma(profile.smooth_sigma)
        .build()?
        .aggregate(&stack)?;
    Ok(surface)
}

/// Opposite corners of a `rows x cols` grid: `(0, 0)` and `(rows-1, cols-1)`.
pub fn corners(rows: usize, cols: usize) -> (Cell, Cell) {
    (
        Cell::new(0, 0),
        Cell::new(rows.saturating_sub(1), cols.saturating_sub(1)),
    )
}
