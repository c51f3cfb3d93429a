//! Fathom: cost surfaces, least-cost paths, and a grid world to walk them.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Fathom sub-crates. For most users, adding `fathom` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fathom::prelude::*;
//!
//! // Two 3x3 channels: a gradient and a flat field.
//! let gradient = Raster::from_fn(3, 3, |c| c.col as f64).unwrap();
//! let flat = Raster::filled(3, 3, 2.0).unwrap();
//! let stack = ChannelStack::new(vec![gradient, flat]).unwrap();
//!
//! // Offline: aggregate and plan.
//! let surface = aggregate_cost(&stack, &[1.0, 0.5], None, 0.0).unwrap();
//! let planner = Planner::new(Algorithm::AStar(Heuristic::Euclidean));
//! let plan = planner.plan(&surface, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
//! assert!(plan.is_found());
//!
//! // Online: walk the same surface step by step.
//! let config = GridWorldConfig::new(surface, Cell::new(0, 0), Cell::new(2, 2));
//! let mut world = GridWorld::new(config).unwrap();
//! let summary = rollout(&mut world, &mut GreedyPolicy::new(7)).unwrap();
//! assert!(summary.steps >= 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fathom-core` | Cells, rasters, channel stacks, cost surfaces, errors |
//! | [`space`] | `fathom-space` | The 8-connected grid topology |
//! | [`cost`] | `fathom-cost` | Normalization, transforms, smoothing, aggregation |
//! | [`path`] | `fathom-path` | Dijkstra and A* over a cost field |
//! | [`env`] | `fathom-env` | Grid-world environment, policies, rollouts |
//! | [`data`] | `fathom-data` | Grid generation, readers, environment loading |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`fathom-core`).
pub use fathom_core as types;

/// Grid topology (`fathom-space`).
///
/// [`space::Square8`] resolves the eight compass moves of a cell under
/// clamp or absorb edge handling.
pub use fathom_space as space;

/// Cost aggregation (`fathom-cost`).
///
/// Build a [`cost::CostAggregator`] once and apply it to many stacks, or
/// call [`cost::aggregate_cost`] for a one-off surface.
pub use fathom_cost as cost;

/// Least-cost paths (`fathom-path`).
pub use fathom_path as path;

/// Grid-world environment (`fathom-env`).
///
/// [`env::GridWorld`] moves one agent over a cost surface and returns
/// local observations and negative-cost rewards.
pub use fathom_env as env;

/// Environment assembly (`fathom-data`).
pub use fathom_data as data;

/// Common imports for typical Fathom usage.
///
/// ```rust
/// use fathom::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use fathom_core::{Cell, ChannelStack, CostSurface, Raster};

    // Errors
    pub use fathom_core::{CostError, EnvError, PathError, RasterError};

    // Cost
    pub use fathom_cost::{aggregate_cost, ChannelTransform, ClipPercentiles, CostAggregator};

    // Path
    pub use fathom_path::{path_cost, Algorithm, CostField, Heuristic, PathResult, Planner};

    // Environment
    pub use fathom_env::{
        rollout, Action, GreedyPolicy, GridWorld, GridWorldConfig, Observation, Policy,
        RandomPolicy, StepResult,
    };

    // Loading
    pub use fathom_data::{load_environment, EnvFactory, LoaderConfig, MemoryReader};
}
