//! Shortest-path search over 8-connected cost grids.
//!
//! The grid is treated as a weighted graph: every cell connects to its
//! (up to) eight in-bounds neighbours, and the cost of the edge `u -> v`
//! is
//!
//! ```text
//! length(u, v) * 0.5 * (cost[u] + cost[v])
//! ```
//!
//! where `length` is `1` for orthogonal and `√2` for diagonal steps.
//! Both [`dijkstra`] and [`astar`] stop as soon as the goal is popped
//! from the frontier and report an unreachable goal as
//! `path: None, total_cost: +inf` rather than as an error.
//!
//! Any [`CostField`] can be searched: a validated
//! [`CostSurface`](fathom_core::CostSurface), or a raw
//! [`Raster`](fathom_core::Raster) in which `+inf` marks impassable cells.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod field;
pub mod heuristic;
pub mod planner;
pub mod result;
pub mod search;

pub use field::{edge_cost, path_cost, CostField};
pub use heuristic::Heuristic;
pub use planner::{Algorithm, Planner};
pub use result::PathResult;
pub use search::{astar, dijkstra};
