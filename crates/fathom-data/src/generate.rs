//! Reproducible synthetic channel stacks.
//!
//! Every channel is drawn uniformly from `[0, 1)`, except the last,
//! which is replaced by a sparse obstacle indicator: each cell is `10.0`
//! with probability `obstacle_prob` and `0.0` otherwise. The amplified
//! obstacle channel dominates the percentile normalization of that
//! channel, so obstacles stand out in the aggregated surface.

use fathom_core::{ChannelStack, Raster};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::LoadError;
use crate::meta::RasterMeta;

/// Value written to obstacle cells of the last channel.
pub const OBSTACLE_VALUE: f64 = 10.0;

/// Shape and randomness of a generated grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// Number of channels (C).
    pub channels: usize,
    /// Rows (H).
    pub rows: usize,
    /// Columns (W).
    pub cols: usize,
    /// Probability that a cell of the last channel is an obstacle.
    pub obstacle_prob: f64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            channels: 3,
            rows: 64,
            cols: 64,
            obstacle_prob: 0.03,
            seed: 42,
        }
    }
}

impl GridSpec {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.channels == 0 {
            return Err(LoadError::InvalidSpec {
                reason: "channels must be at least 1".to_string(),
            });
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(LoadError::InvalidSpec {
                reason: format!("grid must be non-empty, got {}x{}", self.rows, self.cols),
            });
        }
        if !(0.0..=1.0).contains(&self.obstacle_prob) {
            return Err(LoadError::InvalidSpec {
                reason: format!(
                    "obstacle_prob must be in [0, 1], got {}",
                    self.obstacle_prob
                ),
            });
        }
        Ok(())
    }

    /// Provenance metadata for a grid generated from this spec.
    pub fn meta(&self) -> RasterMeta {
        RasterMeta::new()
            .with_attribute("generated_by", "generate_random_grid")
            .with_attribute("seed", self.seed)
    }
}

/// Generate a `(C, H, W)` channel stack from `spec`.
///
/// Deterministic: the same spec always yields the same stack.
pub fn generate_random_grid(spec: &GridSpec) -> Result<ChannelStack, LoadError> {
    spec.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(spec.seed);
    let mut channels = (0..spec.channels)
        .map(|_| Raster::from_fn(spec.rows, spec.cols, |_| rng.random::<f64>()))
        .collect::<Result<Vec<_>, _>>()?;

    let obstacles = Raster::from_fn(spec.rows, spec.cols, |_| {
        if rng.random::<f64>() < spec.obstacle_prob {
            OBSTACLE_VALUE
        } else {
            0.0
        }
    })?;
    let obstacle_count = obstacles
        .as_slice()
        .iter()
        .filter(|&&v| v == OBSTACLE_VALUE)
        .count();
    if let Some(last) = channels.last_mut() {
        *last = obstacles;
    }

    debug!(
        channels = spec.channels,
        rows = spec.rows,
        cols = spec.cols,
        seed = spec.seed,
        obstacle_count,
        "generated random grid"
    );
    Ok(ChannelStack::new(channels)?)
}
