//! Dijkstra and A* over an 8-connected cost field.
//!
//! Both algorithms share one best-first loop: a min-heap keyed by
//! `g + h`, a closed set checked on pop (stale duplicate entries are
//! skipped), and strict-improvement relaxation. Dijkstra is the loop
//! with `h = 0`. Heap ties are broken by insertion order so results are
//! deterministic for a fixed input.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fathom_core::{Cell, PathError};
use fathom_space::{EdgeBehavior, Square8};
use tracing::debug;

use crate::field::{edge_cost, validate, CostField};
use crate::heuristic::Heuristic;
use crate::result::PathResult;

/// Shortest path from `start` to `goal` by Dijkstra's algorithm.
///
/// Terminates as soon as the goal is popped from the frontier.
///
/// # Errors
///
/// [`PathError`] if `start` or `goal` is out of bounds or the field
/// holds a NaN or negative cost. An unreachable goal is not an error.
pub fn dijkstra<F: CostField + ?Sized>(
    field: &F,
    start: Cell,
    goal: Cell,
) -> Result<PathResult, PathError> {
    best_first(field, start, goal, Heuristic::Zero, "dijkstra")
}

/// Shortest path from `start` to `goal` by A* with the given heuristic.
///
/// Pops by lowest `f = g + h` and terminates the moment the goal is
/// popped. A neighbour is re-pushed whenever a strictly better `g` is
/// found; duplicates are discarded on pop via the closed set.
///
/// # Errors
///
/// Same as [`dijkstra`].
pub fn astar<F: CostField + ?Sized>(
    field: &F,
    start: Cell,
    goal: Cell,
    heuristic: Heuristic,
) -> Result<PathResult, PathError> {
    best_first(field, start, goal, heuristic, "astar")
}

/// A frontier entry. Ordered so that `BinaryHeap` pops the lowest
/// priority first and, among equal priorities, the earliest push.
#[derive(Debug)]
struct Frontier {
    priority: f64,
    seq: u64,
    index: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn best_first<F: CostField + ?Sized>(
    field: &F,
    start: Cell,
    goal: Cell,
    heuristic: Heuristic,
    algorithm: &'static str,
) -> Result<PathResult, PathError> {
    validate(field, start, goal)?;
    let (rows, cols) = field.shape();
    let space = Square8::new(rows, cols, EdgeBehavior::Absorb).map_err(|_| PathError::EmptyGrid)?;

    let n = space.cell_count();
    let start_idx = space.index_of(start);
    let goal_idx = space.index_of(goal);
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut closed = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;
    let mut expanded = 0usize;

    dist[start_idx] = 0.0;
    heap.push(Frontier {
        priority: heuristic.estimate(start, goal),
        seq,
        index: start_idx,
    });

    while let Some(Frontier { index, .. }) = heap.pop() {
        if closed[index] {
            continue;
        }
        closed[index] = true;
        expanded += 1;

        if index == goal_idx {
            let path = reconstruct(&space, &prev, goal_idx);
            let total_cost = dist[goal_idx];
            debug!(
                algorithm,
                heuristic = heuristic.name(),
                %start,
                %goal,
                expanded,
                total_cost,
                steps = path.len() - 1,
                "goal reached"
            );
            return Ok(PathResult {
                path: Some(path),
                total_cost,
                nodes_expanded: expanded,
            });
        }

        let u = space.cell_at(index);
        let g = dist[index];
        for nb in space.neighbours(u) {
            let v = space.index_of(nb.cell);
            if closed[v] {
                continue;
            }
            let w = edge_cost(field, u, nb.cell, nb.length);
            if !w.is_finite() {
                continue;
            }
            let candidate = g + w;
            if candidate < dist[v] {
                dist[v] = candidate;
                prev[v] = Some(index);
                seq += 1;
                heap.push(Frontier {
                    priority: candidate + heuristic.estimate(nb.cell, goal),
                    seq,
                    index: v,
                });
            }
        }
    }

    debug!(algorithm, %start, %goal, expanded, "goal unreachable");
    Ok(PathResult::unreachable(expanded))
}

fn reconstruct(space: &Square8, prev: &[Option<usize>], goal_idx: usize) -> Vec<Cell> {
    let mut path = vec![space.cell_at(goal_idx)];
    let mut cursor = goal_idx;
    while let Some(p) = prev[cursor] {
        path.push(space.cell_at(p));
        cursor = p;
    }
    path.reverse();
    path
}
