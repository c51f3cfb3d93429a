//! Error types for space operations.

use fathom_core::Cell;
use std::fmt;

/// Errors arising from space construction or spatial queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A cell is outside the bounds of the space.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Grid shape `(rows, cols)`.
        shape: (usize, usize),
    },
    /// Attempted to construct a space with zero cells.
    EmptySpace,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell, shape } => {
                write!(f, "cell {cell} out of bounds: [0, {}) x [0, {})", shape.0, shape.1)
            }
            Self::EmptySpace => write!(f, "space must have at least one cell"),
        }
    }
}

impl std::error::Error for SpaceError {}
