//! Loader error type.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use fathom_core::{CostError, RasterError};
use fathom_env::ConfigError;

/// Errors from generating, reading, or assembling an environment.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadError {
    /// No grid is registered at the requested path.
    NotFound {
        /// The requested path.
        path: PathBuf,
    },
    /// A reader failed to decode the grid at `path`.
    Read {
        /// The requested path.
        path: PathBuf,
        /// Reader-specific description.
        reason: String,
    },
    /// A [`GridSpec`](crate::GridSpec) violated an invariant.
    InvalidSpec {
        /// Which invariant was violated.
        reason: String,
    },
    /// Channel data was malformed.
    Raster(RasterError),
    /// Aggregation rejected the channels or weights.
    Cost(CostError),
    /// The assembled grid-world configuration was invalid.
    Config(ConfigError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "no grid at {}", path.display()),
            Self::Read { path, reason } => {
                write!(f, "failed to read grid at {}: {reason}", path.display())
            }
            Self::InvalidSpec { reason } => write!(f, "invalid grid spec: {reason}"),
            Self::Raster(e) => write!(f, "raster: {e}"),
            Self::Cost(e) => write!(f, "cost: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Raster(e) => Some(e),
            Self::Cost(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RasterError> for LoadError {
    fn from(e: RasterError) -> Self {
        Self::Raster(e)
    }
}

impl From<CostError> for LoadError {
    fn from(e: CostError) -> Self {
        Self::Cost(e)
    }
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
