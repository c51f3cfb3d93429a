//! Search outcome.

use fathom_core::Cell;

/// Result of a shortest-path search.
///
/// When the goal is reachable, `path` runs from start to goal inclusive
/// and `total_cost` is the sum of its edge costs. When it is not,
/// `path` is `None` and `total_cost` is `+inf`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Cells from start to goal, inclusive.
    pub path: Option<Vec<Cell>>,
    /// Sum of edge costs along `path`, or `+inf` if unreachable.
    pub total_cost: f64,
    /// Number of cells popped and expanded during the search.
    pub nodes_expanded: usize,
}

impl PathResult {
    pub(crate) fn unreachable(nodes_expanded: usize) -> Self {
        Self {
            path: None,
            total_cost: f64::INFINITY,
            nodes_expanded,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the path, or 0 if unreachable.
    pub fn len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Whether no path was found.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(path, total_cost)`.
    pub fn into_parts(self) -> (Option<Vec<Cell>>, f64) {
        (self.path, self.total_cost)
    }
}
