//! Error types for the Fathom toolkit.
//!
//! Organized by subsystem: raster construction, cost aggregation, path
//! search, and the grid-world simulator. Every variant describes a
//! caller contract violation; degenerate-but-valid inputs (constant
//! channels, all-zero surfaces, unreachable goals) are modeled as
//! ordinary results, not errors.

use std::error::Error;
use std::fmt;

use crate::cell::Cell;

/// Errors from building rasters, channel stacks, and cost surfaces.
#[derive(Clone, Debug, PartialEq)]
pub enum RasterError {
    /// A raster was requested with zero rows or zero columns.
    Empty {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// The backing buffer does not hold exactly `rows * cols` values.
    DataLength {
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        actual: usize,
    },
    /// A channel stack contained no channels.
    EmptyStack,
    /// A channel's shape differs from the first channel of its stack.
    ChannelShape {
        /// Index of the offending channel.
        index: usize,
        /// Shape of channel 0.
        expected: (usize, usize),
        /// Shape of the offending channel.
        actual: (usize, usize),
    },
    /// A cost surface value was NaN or infinite.
    NonFiniteCost {
        /// Cell holding the value.
        cell: Cell,
    },
    /// A cost surface value was negative.
    NegativeCost {
        /// Cell holding the value.
        cell: Cell,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { rows, cols } => {
                write!(f, "raster must have at least one cell, got {rows}x{cols}")
            }
            Self::DataLength { expected, actual } => {
                write!(f, "raster data has {actual} values, expected {expected}")
            }
            Self::EmptyStack => write!(f, "channel stack has no channels"),
            Self::ChannelShape {
                index,
                expected,
                actual,
            } => write!(
                f,
                "channel {index} has shape {}x{}, expected {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::NonFiniteCost { cell } => write!(f, "cost at {cell} is not finite"),
            Self::NegativeCost { cell, value } => {
                write!(f, "cost at {cell} is negative ({value})")
            }
        }
    }
}

impl Error for RasterError {}

/// Errors from channel normalization and cost aggregation.
///
/// All variants are detected before any computation starts.
#[derive(Clone, Debug, PartialEq)]
pub enum CostError {
    /// An aggregator was built without a weight vector.
    MissingWeights,
    /// Weight vector length differs from the channel count.
    WeightCount {
        /// Number of channels in the stack.
        channels: usize,
        /// Number of weights supplied.
        weights: usize,
    },
    /// Transform list length differs from the channel count.
    TransformCount {
        /// Number of channels in the stack.
        channels: usize,
        /// Number of transforms supplied.
        transforms: usize,
    },
    /// A weight was negative, NaN, or infinite.
    InvalidWeight {
        /// Channel index of the weight.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// Smoothing sigma was negative, NaN, or infinite.
    InvalidSigma {
        /// The offending value.
        value: f64,
    },
    /// Percentile bounds outside `0 <= low <= high <= 100`.
    InvalidPercentiles {
        /// Lower percentile.
        low: f64,
        /// Upper percentile.
        high: f64,
    },
    /// The aggregated surface could not be wrapped as a cost surface.
    Raster(RasterError),
}

impl fmt::Display for CostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWeights => write!(f, "weights are required"),
            Self::WeightCount { channels, weights } => {
                write!(f, "got {weights} weights for {channels} channels")
            }
            Self::TransformCount {
                channels,
                transforms,
            } => write!(f, "got {transforms} transforms for {channels} channels"),
            Self::InvalidWeight { index, value } => {
                write!(f, "weight {index} must be finite and >= 0, got {value}")
            }
            Self::InvalidSigma { value } => {
                write!(f, "smooth_sigma must be finite and >= 0, got {value}")
            }
            Self::InvalidPercentiles { low, high } => write!(
                f,
                "percentiles must satisfy 0 <= low <= high <= 100, got ({low}, {high})"
            ),
            Self::Raster(e) => write!(f, "raster: {e}"),
        }
    }
}

impl Error for CostError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Raster(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RasterError> for CostError {
    fn from(e: RasterError) -> Self {
        Self::Raster(e)
    }
}

/// Errors from shortest-path search.
///
/// An unreachable goal is *not* an error; it is reported through the
/// search result.
#[derive(Clone, Debug, PartialEq)]
pub enum PathError {
    /// The start cell lies outside the grid.
    StartOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Grid shape `(rows, cols)`.
        shape: (usize, usize),
    },
    /// The goal cell lies outside the grid.
    GoalOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Grid shape `(rows, cols)`.
        shape: (usize, usize),
    },
    /// The cost field has no cells.
    EmptyGrid,
    /// A cell cost was NaN or negative. `+inf` is allowed and means impassable.
    InvalidCellCost {
        /// Cell holding the value.
        cell: Cell,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds { cell, shape } => write!(
                f,
                "start {cell} out of bounds for {}x{} grid",
                shape.0, shape.1
            ),
            Self::GoalOutOfBounds { cell, shape } => write!(
                f,
                "goal {cell} out of bounds for {}x{} grid",
                shape.0, shape.1
            ),
            Self::EmptyGrid => write!(f, "cost field has no cells"),
            Self::InvalidCellCost { cell, value } => {
                write!(f, "cell cost at {cell} must be >= 0 and not NaN, got {value}")
            }
        }
    }
}

impl Error for PathError {}

/// Errors from stepping the grid-world simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvError {
    /// The action code is not one of the 9 defined moves.
    InvalidAction {
        /// The rejected action code.
        code: u8,
    },
    /// `step` was called before the first `reset`.
    NotReset,
    /// `step` was called after the episode terminated without a new `reset`.
    EpisodeTerminated,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAction { code } => {
                write!(f, "invalid action {code}, expected 0..=8")
            }
            Self::NotReset => write!(f, "step called before reset"),
            Self::EpisodeTerminated => write!(f, "episode terminated; call reset before step"),
        }
    }
}

impl Error for EnvError {}
