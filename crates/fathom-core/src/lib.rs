//! Core types for the Fathom cost-grid toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data shapes exchanged between every other crate in the workspace:
//! grid cells, raster channels, channel stacks, the aggregated cost
//! surface, and the error enums for each subsystem.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod raster;
pub mod surface;

pub use cell::Cell;
pub use error::{CostError, EnvError, PathError, RasterError};
pub use raster::{ChannelStack, Raster};
pub use surface::CostSurface;
