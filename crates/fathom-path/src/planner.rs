//! Algorithm selection by value.

use std::fmt;

use fathom_core::{Cell, PathError};

use crate::field::CostField;
use crate::heuristic::Heuristic;
use crate::result::PathResult;
use crate::search::{astar, dijkstra};

/// Which search algorithm a [`Planner`] runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Dijkstra's algorithm.
    #[default]
    Dijkstra,
    /// A* with the given heuristic.
    AStar(Heuristic),
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dijkstra => f.write_str("dijkstra"),
            Self::AStar(h) => write!(f, "astar-{}", h.name()),
        }
    }
}

/// Runs a configured search algorithm.
///
/// ```
/// use fathom_core::{Cell, CostSurface};
/// use fathom_path::{Algorithm, Heuristic, Planner};
///
/// let surface = CostSurface::from_vec(3, 3, vec![0.0; 9]).unwrap();
/// let planner = Planner::new(Algorithm::AStar(Heuristic::Euclidean));
/// let result = planner.plan(&surface, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
/// assert_eq!(result.total_cost, 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Planner {
    /// Algorithm to run.
    pub algorithm: Algorithm,
}

impl Planner {
    /// A planner running `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Search `field` for a least-cost path from `start` to `goal`.
    pub fn plan<F: CostField + ?Sized>(
        &self,
        field: &F,
        start: Cell,
        goal: Cell,
    ) -> Result<PathResult, PathError> {
        match self.algorithm {
            Algorithm::Dijkstra => dijkstra(field, start, goal),
            Algorithm::AStar(h) => astar(field, start, goal, h),
        }
    }
}
