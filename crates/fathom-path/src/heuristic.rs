//! A* goal-distance estimates.

use fathom_core::Cell;

/// Estimate of the remaining cost from a cell to the goal.
///
/// Estimates are measured in cells and do not account for cell costs.
/// With costs in `[0, 1]` only [`Heuristic::Zero`] is guaranteed never
/// to overestimate, so it is the only choice that preserves optimality
/// on arbitrary surfaces. The distance heuristics trade that guarantee
/// for fewer expansions. Defaults to [`Heuristic::Manhattan`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// `|Δrow| + |Δcol|`.
    #[default]
    Manhattan,
    /// `sqrt(Δrow² + Δcol²)`.
    Euclidean,
    /// Always `0`; A* expands exactly like Dijkstra.
    Zero,
}

impl Heuristic {
    /// Estimated distance from `from` to `goal`.
    pub fn estimate(self, from: Cell, goal: Cell) -> f64 {
        let (dr, dc) = from.abs_diff(goal);
        let (dr, dc) = (dr as f64, dc as f64);
        match self {
            Self::Manhattan => dr + dc,
            Self::Euclidean => dr.hypot(dc),
            Self::Zero => 0.0,
        }
    }

    /// Lowercase name, as used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Zero => "zero",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimates() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 7.0);
        assert_eq!(Heuristic::Euclidean.estimate(a, b), 5.0);
        assert_eq!(Heuristic::Zero.estimate(a, b), 0.0);
        assert_eq!(Heuristic::Euclidean.estimate(b, b), 0.0);
    }

    #[test]
    fn default_is_manhattan() {
        assert_eq!(Heuristic::default(), Heuristic::Manhattan);
        assert_eq!(Heuristic::default().name(), "manhattan");
    }
}
