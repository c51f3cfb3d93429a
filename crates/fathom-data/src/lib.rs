//! Raster sources and environment factories for Fathom.
//!
//! - [`generate_random_grid`] synthesizes a reproducible channel stack.
//! - [`RasterReader`] is the seam through which saved grids are loaded;
//!   [`MemoryReader`] is the in-process implementation.
//! - [`load_environment`] turns a [`LoaderConfig`] into an
//!   [`EnvFactory`] that stamps out independent
//!   [`GridWorld`](fathom_env::GridWorld)s over one shared surface.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod generate;
pub mod loader;
pub mod meta;
pub mod reader;

pub use error::LoadError;
pub use generate::{generate_random_grid, GridSpec};
pub use loader::{load_environment, EnvFactory, LoaderConfig};
pub use meta::RasterMeta;
pub use reader::{MemoryReader, RasterReader};
