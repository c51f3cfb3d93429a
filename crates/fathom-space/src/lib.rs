//! Grid topology for Fathom.
//!
//! Defines [`Square8`], the 8-connected lattice every search and
//! simulation in the workspace runs on, and [`EdgeBehavior`], which
//! decides what happens to moves that leave the grid.
//!
//! # Step lengths
//!
//! Orthogonal moves have geometric length `1`, diagonal moves `√2`.
//! The length is carried alongside each neighbour so that edge costs can
//! be scaled without recomputing the offset.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod grid2d;
pub mod square8;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use square8::{Neighbour, Square8, OFFSETS_8};
