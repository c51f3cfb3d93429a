//! Grid-world configuration and validation.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use fathom_core::{Cell, CostSurface};
use fathom_space::SpaceError;

/// Default side length of the observation patch.
pub const DEFAULT_PATCH_SIZE: usize = 3;

// ── ConfigError ─────────────────────────────────────────────────

/// Errors detected by [`GridWorldConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Patch size is even or zero.
    InvalidPatchSize {
        /// The configured size.
        size: usize,
    },
    /// Start cell lies outside the surface.
    StartOutOfBounds {
        /// The configured start.
        cell: Cell,
        /// Surface shape `(rows, cols)`.
        shape: (usize, usize),
    },
    /// Goal cell lies outside the surface.
    GoalOutOfBounds {
        /// The configured goal.
        cell: Cell,
        /// Surface shape `(rows, cols)`.
        shape: (usize, usize),
    },
    /// `max_steps` was explicitly set to zero.
    ZeroMaxSteps,
    /// The surface could not be turned into a grid topology.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPatchSize { size } => {
                write!(f, "patch_size must be odd and >= 1, got {size}")
            }
            Self::StartOutOfBounds { cell, shape } => write!(
                f,
                "start {cell} out of bounds for {}x{} surface",
                shape.0, shape.1
            ),
            Self::GoalOutOfBounds { cell, shape } => write!(
                f,
                "goal {cell} out of bounds for {}x{} surface",
                shape.0, shape.1
            ),
            Self::ZeroMaxSteps => write!(f, "max_steps must be at least 1"),
            Self::Space(e) => write!(f, "space: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── GridWorldConfig ─────────────────────────────────────────────

/// Construction parameters for a [`GridWorld`](crate::GridWorld).
#[derive(Clone, Debug)]
pub struct GridWorldConfig {
    /// The cost surface, shared read-only with other worlds.
    pub surface: Arc<CostSurface>,
    /// Cell the agent occupies after `reset`.
    pub start: Cell,
    /// Cell whose entry ends the episode successfully.
    pub goal: Cell,
    /// Side length of the square observation patch. Odd, `>= 1`.
    pub patch_size: usize,
    /// Step limit per episode. `None` means `2 * rows * cols`.
    pub max_steps: Option<usize>,
}

impl GridWorldConfig {
    /// A config with the default patch size and step limit.
    pub fn new(surface: impl Into<Arc<CostSurface>>, start: Cell, goal: Cell) -> Self {
        Self {
            surface: surface.into(),
            start,
            goal,
            patch_size: DEFAULT_PATCH_SIZE,
            max_steps: None,
        }
    }

    /// Set the patch size.
    pub fn with_patch_size(mut self, patch_size: usize) -> Self {
        self.patch_size = patch_size;
        self
    }

    /// Set an explicit step limit.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// The step limit after applying the `2 * rows * cols` default.
    pub fn resolved_max_steps(&self) -> usize {
        let (rows, cols) = self.surface.shape();
        self.max_steps.unwrap_or(2 * rows * cols)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Patch must have a centre cell.
        if self.patch_size == 0 || self.patch_size % 2 == 0 {
            return Err(ConfigError::InvalidPatchSize {
                size: self.patch_size,
            });
        }
        // 2. Start and goal inside the surface.
        let shape = self.surface.shape();
        if !self.surface.contains(self.start) {
            return Err(ConfigError::StartOutOfBounds {
                cell: self.start,
                shape,
            });
        }
        if !self.surface.contains(self.goal) {
            return Err(ConfigError::GoalOutOfBounds {
                cell: self.goal,
                shape,
            });
        }
        // 3. An explicit step limit must allow at least one step.
        if self.max_steps == Some(0) {
            return Err(ConfigError::ZeroMaxSteps);
        }
        Ok(())
    }
}
