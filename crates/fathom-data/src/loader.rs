//! Environment assembly from a grid source.
//!
//! [`load_environment`] runs the full pipeline once:
//!
//! 1. obtain a channel stack (generate, or read through a [`RasterReader`])
//! 2. aggregate it into a cost surface with the configured weights and smoothing
//! 3. resolve start and goal: explicit config, then metadata, then the
//!    `(0, 0)` / `(H-1, W-1)` corners
//! 4. validate the resulting grid-world configuration
//!
//! The returned [`EnvFactory`] shares the surface behind an `Arc`, so
//! every world it makes is independent but no surface is ever copied.

use std::path::PathBuf;
use std::sync::Arc;

use fathom_core::{Cell, CostSurface};
use fathom_cost::CostAggregator;
use fathom_env::{ConfigError, GridWorld, GridWorldConfig};
use tracing::info;

use crate::error::LoadError;
use crate::generate::{generate_random_grid, GridSpec};
use crate::meta::RasterMeta;
use crate::reader::RasterReader;

/// Channel weights of the standalone profile: wave height, current
/// velocity, temperature, depth.
pub const STANDALONE_WEIGHTS: [f64; 4] = [1.0, 0.8, 0.3, 0.5];

/// Saved-grid path of the hub profile.
pub const HUB_GRID_PATH: &str = "dynamic_ocean/data/sample_grid.npz";

/// Saved-grid path of the hub stub profile.
pub const HUB_STUB_GRID_PATH: &str = "data/sample_grid.npz";

// ── LoaderConfig ────────────────────────────────────────────────

/// Everything needed to assemble an environment.
///
/// Three named profiles cover the usual deployments:
/// [`standalone`](LoaderConfig::standalone) (generated grid),
/// [`hub`](LoaderConfig::hub) and [`hub_stub`](LoaderConfig::hub_stub)
/// (saved grid at two conventional paths).
#[derive(Clone, Debug, PartialEq)]
pub struct LoaderConfig {
    /// Saved grid to read. `None` generates one from the fields below.
    pub grid_path: Option<PathBuf>,
    /// `(rows, cols)` of a generated grid.
    pub grid_size: (usize, usize),
    /// Channel count of a generated grid.
    pub channel_count: usize,
    /// Obstacle probability of a generated grid.
    pub obstacle_prob: f64,
    /// Seed of a generated grid.
    pub seed: u64,
    /// Per-channel weights. `None` weights every channel `1.0`.
    pub weights: Option<Vec<f64>>,
    /// Gaussian smoothing sigma applied after the weighted sum.
    pub smooth_sigma: f64,
    /// Observation patch side length.
    pub patch_size: usize,
    /// Step limit. `None` means `2 * rows * cols`.
    pub max_steps: Option<usize>,
    /// Start override.
    pub start: Option<Cell>,
    /// Goal override.
    pub goal: Option<Cell>,
}

impl LoaderConfig {
    /// Generated 20x20 grid with 4 weighted channels, no smoothing, seed 42.
    pub fn standalone() -> Self {
        Self {
            grid_path: None,
            grid_size: (20, 20),
            channel_count: 4,
            obstacle_prob: GridSpec::default().obstacle_prob,
            seed: 42,
            weights: Some(STANDALONE_WEIGHTS.to_vec()),
            smooth_sigma: 0.0,
            patch_size: fathom_env::config::DEFAULT_PATCH_SIZE,
            max_steps: None,
            start: None,
            goal: None,
        }
    }

    /// Saved grid at [`HUB_GRID_PATH`], uniform weights, sigma 1.0.
    pub fn hub() -> Self {
        Self::saved(HUB_GRID_PATH)
    }

    /// Saved grid at [`HUB_STUB_GRID_PATH`], uniform weights, sigma 1.0.
    pub fn hub_stub() -> Self {
        Self::saved(HUB_STUB_GRID_PATH)
    }

    fn saved(path: &str) -> Self {
        Self {
            grid_path: Some(PathBuf::from(path)),
            weights: None,
            smooth_sigma: 1.0,
            ..Self::standalone()
        }
    }

    /// Read the grid from `path` instead of generating it.
    pub fn with_grid_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.grid_path = Some(path.into());
        self
    }

    /// Set explicit channel weights.
    pub fn with_weights(mut self, weights: impl Into<Vec<f64>>) -> Self {
        self.weights = Some(weights.into());
        self
    }

    /// Override the start cell.
    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = Some(start);
        self
    }

    /// Override the goal cell.
    pub fn with_goal(mut self, goal: Cell) -> Self {
        self.goal = Some(goal);
        self
    }

    /// The generation spec implied by this config.
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec {
            channels: self.channel_count,
            rows: self.grid_size.0,
            cols: self.grid_size.1,
            obstacle_prob: self.obstacle_prob,
            seed: self.seed,
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::standalone()
    }
}

// ── EnvFactory ──────────────────────────────────────────────────

/// Makes fresh [`GridWorld`]s over one shared cost surface.
#[derive(Clone, Debug)]
pub struct EnvFactory {
    config: GridWorldConfig,
    meta: RasterMeta,
}

impl EnvFactory {
    /// A new, un-reset world.
    pub fn make(&self) -> Result<GridWorld, ConfigError> {
        GridWorld::new(self.config.clone())
    }

    /// The shared cost surface.
    pub fn surface(&self) -> &Arc<CostSurface> {
        &self.config.surface
    }

    /// Resolved start cell.
    pub fn start(&self) -> Cell {
        self.config.start
    }

    /// Resolved goal cell.
    pub fn goal(&self) -> Cell {
        self.config.goal
    }

    /// The world configuration every `make` call uses.
    pub fn config(&self) -> &GridWorldConfig {
        &self.config
    }

    /// Metadata of the grid source.
    pub fn meta(&self) -> &RasterMeta {
        &self.meta
    }
}

/// Assemble an [`EnvFactory`] from `config`.
///
/// `reader` is consulted only when `config.grid_path` is set.
///
/// # Errors
///
/// - [`LoadError::NotFound`] / [`LoadError::Read`] from the reader
/// - [`LoadError::InvalidSpec`] for a bad generation spec
/// - [`LoadError::Cost`] when the weight count differs from the channel
///   count or a weight or sigma is invalid
/// - [`LoadError::Config`] for an out-of-bounds start/goal or bad patch size
pub fn load_environment(
    config: &LoaderConfig,
    reader: &dyn RasterReader,
) -> Result<EnvFactory, LoadError> {
    let (stack, meta) = match &config.grid_path {
        Some(path) => reader.read(path)?,
        None => {
            let spec = config.grid_spec();
            (generate_random_grid(&spec)?, spec.meta())
        }
    };

    let weights = config
        .weights
        .clone()
        .unwrap_or_else(|| vec![1.0; stack.channel_count()]);
    let surface = CostAggregator::builder()
        .weights(weights)
        .smooth_sigma(config.smooth_sigma)
        .build()?
        .aggregate(&stack)?;

    let (rows, cols) = surface.shape();
    let start = config.start.or(meta.start).unwrap_or(Cell::new(0, 0));
    let goal = config
        .goal
        .or(meta.goal)
        .unwrap_or(Cell::new(rows - 1, cols - 1));

    let world_config = GridWorldConfig {
        surface: Arc::new(surface),
        start,
        goal,
        patch_size: config.patch_size,
        max_steps: config.max_steps,
    };
    world_config.validate()?;

    info!(
        source = %config
            .grid_path
            .as_deref()
            .map_or_else(|| "generated".to_string(), |p| p.display().to_string()),
        channels = stack.channel_count(),
        rows,
        cols,
        %start,
        %goal,
        "environment loaded"
    );
    Ok(EnvFactory {
        config: world_config,
        meta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::MemoryReader;
    use fathom_core::CostError;

    #[test]
    fn profiles() {
        let s = LoaderConfig::standalone();
        assert_eq!(s.grid_path, None);
        assert_eq!(s.grid_size, (20, 20));
        assert_eq!(s.channel_count, 4);
        assert_eq!(s.weights.as_deref(), Some(&STANDALONE_WEIGHTS[..]));
        assert_eq!(s.smooth_sigma, 0.0);
        assert_eq!(s.seed, 42);
        assert_eq!(LoaderConfig::default(), s);

        let h = LoaderConfig::hub();
        assert_eq!(h.grid_path, Some(PathBuf::from(HUB_GRID_PATH)));
        assert_eq!(h.weights, None);
        assert_eq!(h.smooth_sigma, 1.0);
        assert_eq!(
            LoaderConfig::hub_stub().grid_path,
            Some(PathBuf::from(HUB_STUB_GRID_PATH))
        );
    }

    #[test]
    fn standalone_generates_and_defaults_corners() {
        let f = load_environment(&LoaderConfig::standalone(), &MemoryReader::new()).unwrap();
        assert_eq!(f.surface().shape(), (20, 20));
        assert_eq!(f.start(), Cell::new(0, 0));
        assert_eq!(f.goal(), Cell::new(19, 19));
        assert_eq!(f.meta().attribute("seed"), Some("42"));
        let max = f.surface().max_cost();
        assert!(max == 0.0 || (max - 1.0).abs() < 1e-12);
    }

    #[test]
    fn generated_weight_mismatch_is_rejected() {
        let cfg = LoaderConfig::standalone().with_weights([1.0, 1.0]);
        let err = load_environment(&cfg, &MemoryReader::new()).unwrap_err();
        assert_eq!(
            err,
            LoadError::Cost(CostError::WeightCount {
                channels: 4,
                weights: 2
            })
        );
    }

    #[test]
    fn missing_saved_grid_is_not_found() {
        let err = load_environment(&LoaderConfig::hub(), &MemoryReader::new()).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn factory_makes_independent_worlds() {
        let f = load_environment(&LoaderConfig::standalone(), &MemoryReader::new()).unwrap();
        let mut a = f.make().unwrap();
        let b = f.make().unwrap();
        a.reset();
        a.step(fathom_env::Action::South).unwrap();
        assert_eq!(b.step_count(), 0);
        assert!(Arc::ptr_eq(a.surface(), b.surface()));
    }

    #[test]
    fn out_of_bounds_override_is_rejected() {
        let cfg = LoaderConfig::standalone().with_goal(Cell::new(20, 0));
        let err = load_environment(&cfg, &MemoryReader::new()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Config(ConfigError::GoalOutOfBounds { .. })
        ));
    }
}
